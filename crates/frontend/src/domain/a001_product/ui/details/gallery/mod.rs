//! Product media gallery: primary display, thumbnail strip and fullscreen
//! viewer, all driven by one `GallerySelection`.

pub mod fullscreen_viewer;
pub mod media_view;
pub mod state;
pub mod thumbnail_strip;

use fullscreen_viewer::{FullscreenViewer, ViewerDetails};
use media_view::{EmptyMedia, MediaView};
use state::GallerySelection;
use thumbnail_strip::ThumbnailStrip;

use contracts::domain::a001_product::MediaSequence;
use leptos::prelude::*;

#[component]
pub fn ProductGallery(
    #[prop(into)] media: Signal<MediaSequence>,
    selection: RwSignal<GallerySelection>,
    details: ViewerDetails,
) -> impl IntoView {
    let current = move || {
        let index = selection.with(|s| s.selected_index());
        media.with(|m| m.get(index).cloned())
    };

    view! {
        <div class="gallery">
            {move || match current() {
                Some(entry) => view! {
                    <button
                        class="gallery__primary"
                        title="Open fullscreen"
                        on:click=move |_| selection.update(|s| s.open())
                    >
                        <MediaView entry=entry />
                    </button>
                }.into_any(),
                None => view! { <EmptyMedia /> }.into_any(),
            }}

            <ThumbnailStrip media=media selection=selection />

            <FullscreenViewer media=media selection=selection details=details />
        </div>
    }
}
