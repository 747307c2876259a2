use crate::shared::components::card_animated::CardAnimated;
use crate::shared::format::format_date;
use crate::shared::placeholder::{image_src, swap_to_placeholder};
use contracts::domain::a001_product::ProductListItemDto;
use leptos::prelude::*;
use leptos_router::components::A;

/// Stagger step between neighbouring cards
const CARD_DELAY_STEP_MS: u32 = 15;

/// Card grid linking every product to its detail page
#[component]
pub fn ProductGrid(#[prop(into)] items: Signal<Vec<ProductListItemDto>>) -> impl IntoView {
    view! {
        <div class="product-grid">
            {move || {
                items
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let href = format!("/product/{}", item.id.value());
                        let src = image_src(item.image.as_deref());
                        view! {
                            <A href=href attr:class="product-grid__link">
                                <CardAnimated class="product-card" delay_ms=i as u32 * CARD_DELAY_STEP_MS>
                                    <div class="product-card__image">
                                        <img
                                            src=src
                                            alt=item.name.clone()
                                            loading="lazy"
                                            on:error=swap_to_placeholder
                                        />
                                    </div>
                                    <div class="product-card__body">
                                        <div class="product-card__name">{item.name.clone()}</div>
                                        <div class="product-card__date">{format_date(&item.date_added)}</div>
                                    </div>
                                </CardAnimated>
                            </A>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
