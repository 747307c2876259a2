use crate::shared::icons::icon;
use crate::shared::placeholder::{swap_to_placeholder, PLACEHOLDER_IMAGE};
use contracts::domain::a001_product::MediaEntry;
use leptos::prelude::*;

/// One media entry. Videos get native controls only when `controls` is set,
/// so the primary display stays a click target for opening the viewer.
#[component]
pub fn MediaView(
    entry: MediaEntry,
    #[prop(optional)] controls: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    if entry.is_video() {
        view! {
            <video
                class=format!("media media--video {class}")
                src=entry.url
                controls=controls
                preload="metadata"
                playsinline=true
            ></video>
        }
        .into_any()
    } else {
        view! {
            <img
                class=format!("media media--image {class}")
                src=entry.url
                alt=""
                on:error=swap_to_placeholder
            />
        }
        .into_any()
    }
}

/// Stand-in for a product without any media
#[component]
pub fn EmptyMedia() -> impl IntoView {
    view! {
        <div class="gallery__empty">
            <img class="media media--image" src=PLACEHOLDER_IMAGE alt="" />
            <div class="gallery__empty-text">
                {icon("image")}
                <span>"No media available"</span>
            </div>
        </div>
    }
}
