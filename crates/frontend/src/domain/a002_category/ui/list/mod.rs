use crate::domain::a002_category::api;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::{Input, Spinner};

#[component]
pub fn CategoryList() -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let filter = RwSignal::new(String::new());

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) => set_categories.set(list),
            Err(e) => {
                log::error!("Failed to load categories: {}", e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let visible = move || {
        let filter = filter.get();
        categories
            .get()
            .into_iter()
            .filter(|c| c.matches_filter(&filter))
            .collect::<Vec<_>>()
    };

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <PageHeader title="Categories" subtitle="Browse the catalog by category">
                <Input value=filter placeholder="Filter categories..." />
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Show when=move || loading.get()>
                    <div class="page__loading"><Spinner /></div>
                </Show>

                <div class="category-grid">
                    {move || {
                        visible()
                            .into_iter()
                            .enumerate()
                            .map(|(i, category)| {
                                let href = format!("/category/{}", category.id.value());
                                let overlay = format!("background: {};", category.gradient);
                                view! {
                                    <A href=href attr:class="category-grid__link">
                                        <CardAnimated class="category-card" delay_ms=i as u32 * 40>
                                            <img class="category-card__image" src=category.image.clone() alt=category.name.clone() />
                                            <div class="category-card__overlay" style=overlay></div>
                                            <div class="category-card__text">
                                                <div class="category-card__name">{category.name.clone()}</div>
                                                <div class="category-card__count">
                                                    {format!("{} products", category.product_count)}
                                                </div>
                                            </div>
                                        </CardAnimated>
                                    </A>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <Show when=move || !loading.get() && error.get().is_none() && visible().is_empty()>
                    <div class="page__empty">"No categories match the filter"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
