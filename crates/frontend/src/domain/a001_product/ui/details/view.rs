use super::gallery::fullscreen_viewer::ViewerDetails;
use super::gallery::ProductGallery;
use super::view_model::{LoadState, ProductDetailsVm};
use crate::shared::format::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::{Button, ButtonAppearance, Spinner};

fn viewer_details(product: &Product) -> ViewerDetails {
    ViewerDetails {
        name: product.name.clone(),
        description: product.description.clone(),
        links: product.marketplace_links.clone(),
    }
}

#[component]
fn ProductInfo(product: Product, vm: ProductDetailsVm) -> impl IntoView {
    let category_href = format!("/category/{}", product.category_id.value());
    let media_count = move || vm.media.with(|m| m.len());

    view! {
        <div class="product-info">
            <h1 class="product-info__name">{product.name.clone()}</h1>
            <div class="product-info__meta">
                <span>{format!("Added {}", format_date(&product.date_added))}</span>
                <A href=category_href attr:class="product-info__category">"More from this category"</A>
            </div>
            {product.description.clone().map(|d| view! { <p class="product-info__description">{d}</p> })}
            <div class="product-info__links">
                {product
                    .marketplace_links
                    .iter()
                    .map(|link| view! {
                        <a class="button button--primary" href=link.url.clone() target="_blank" rel="noopener noreferrer">
                            {icon("external-link")}
                            <span>{format!("Buy on {}", link.label)}</span>
                        </a>
                    })
                    .collect_view()}
            </div>
            <Show when=move || { media_count() > 0 }>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.selection.update(|s| s.open())
                >
                    {move || format!("View all media ({})", media_count())}
                </Button>
            </Show>
        </div>
    }
}

/// `/product/:id`
#[component]
pub fn ProductDetails() -> impl IntoView {
    let params = use_params_map();
    let vm = ProductDetailsVm::new();

    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        vm.load(id);
    });

    view! {
        <PageFrame page_id="a001_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__content">
                {move || match vm.load_state.get() {
                    LoadState::Loading => view! {
                        <div class="page__loading"><Spinner /></div>
                    }.into_any(),
                    LoadState::NotFound => view! {
                        <div class="page__empty">
                            <h2>"Product not found"</h2>
                            <p>"The product you are looking for does not exist or was removed."</p>
                            <A href="/">"Back to the latest products"</A>
                        </div>
                    }.into_any(),
                    LoadState::Failed => view! {
                        <div class="alert alert--error">
                            {move || vm.error.get().unwrap_or_default()}
                        </div>
                    }.into_any(),
                    LoadState::Loaded => match vm.product.get() {
                        Some(product) => view! {
                            <div class="product-details">
                                <ProductGallery
                                    media=vm.media
                                    selection=vm.selection
                                    details=viewer_details(&product)
                                />
                                <ProductInfo product=product vm=vm />
                            </div>
                        }.into_any(),
                        None => ().into_any(),
                    },
                }}
            </div>
        </PageFrame>
    }
}
