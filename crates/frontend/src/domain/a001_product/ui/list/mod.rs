mod state;

use crate::domain::a001_product::api::{self, ProductPageQuery};
use crate::domain::a001_product::ui::grid::ProductGrid;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::page_frame::{scroll_to_top, PageFrame};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::ProductListItemDto;
use contracts::domain::a002_category::CategoryFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

/// Newest-first product cards of one category (or all), fetched page by page.
/// Callers remount it when the filter changes, so it always starts at page 1.
#[component]
pub fn PagedProducts(category: CategoryFilter, search: Option<String>) -> impl IntoView {
    let state = state::create_state();
    let (items, set_items) = signal::<Vec<ProductListItemDto>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Only a page switch refetches, not the totals written back below
    let current_page = Memo::new(move |_| state.with(|s| s.page));

    Effect::new(move |_| {
        let query = ProductPageQuery::new(category, search.clone(), current_page.get());
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_page(&query).await {
                Ok(page) => {
                    state.update(|s| {
                        s.page = page.page;
                        s.total_count = page.total;
                        s.total_pages = page.total_pages;
                        s.is_loaded = true;
                    });
                    set_items.set(page.items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let on_page_change = Callback::new(move |page: usize| {
        if page != state.with_untracked(|s| s.page) {
            state.update(|s| s.page = page);
            scroll_to_top();
        }
    });

    view! {
        <div class="page__content">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || loading.get() && !state.with(|s| s.is_loaded)>
                <div class="page__loading"><Spinner /></div>
            </Show>

            <Show when=move || state.with(|s| s.is_loaded && s.total_count == 0)>
                <div class="page__empty">"No products found"</div>
            </Show>

            <ProductGrid items=items />

            <Show when=move || state.with(|s| s.total_pages > 1)>
                <PaginationControls
                    current_page=current_page
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=on_page_change
                />
            </Show>
        </div>
    }
}

/// Index page: latest products across all categories
#[component]
pub fn LatestProducts() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Latest products" subtitle="Newest additions to the catalog" />
            <PagedProducts category=CategoryFilter::All search=None />
        </PageFrame>
    }
}
