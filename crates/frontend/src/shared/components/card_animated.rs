//! CardAnimated: Thaw `Card` with an appear animation.
//!
//! Use `delay_ms` on sibling cards for a staggered effect:
//! ```rust,ignore
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=40>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Upper bound for stagger delays so long grids do not appear one by one
const MAX_DELAY_MS: u32 = 400;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    /// Extra CSS class on the card.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_style = format!(
        "animation: card-appear 0.28s ease-out {}ms both; {}",
        delay_ms.min(MAX_DELAY_MS),
        style
    );

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}
