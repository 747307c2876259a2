use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::shared::search::search_route;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Navbar search: submits to `/category/all?search=...`
#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let text = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match search_route(&text.get_untracked()) {
            Some(route) => {
                navigate(&route, Default::default());
                text.set(String::new());
                ctx.close_drawer();
            }
            None => ctx.notify_error("Error", "Please enter a search term"),
        }
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                class="search-form__input"
                type="search"
                placeholder="Search products..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <button class="button button--icon search-form__submit" type="submit" aria-label="Search">
                {icon("search")}
            </button>
        </form>
    }
}
