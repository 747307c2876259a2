use crate::layout::global_context::use_app_context;
use crate::layout::header::search::SearchForm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/categories", "Categories"),
    ("/dashboard", "Dashboard"),
    ("/products", "Products"),
];

#[component]
fn NavLinks() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="header__nav" on:click=move |_| ctx.close_drawer()>
            {NAV_LINKS
                .into_iter()
                .map(|(href, label)| view! { <A href=href attr:class="header__link">{label}</A> })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__brand">
                    {icon("package")}
                    <span class="header__title">"Storefront"</span>
                </A>
                <div class="header__desktop">
                    <NavLinks />
                </div>
            </div>
            <div class="header__actions">
                <SearchForm />
                <button
                    class="button button--ghost header__drawer-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ctx.toggle_drawer()
                >
                    {move || if ctx.drawer_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>
        </header>
        <Show when=move || ctx.drawer_open.get()>
            <div class="drawer-overlay" on:click=move |_| ctx.close_drawer()></div>
            <aside class="drawer">
                <NavLinks />
            </aside>
        </Show>
    }
}
