use super::state::GallerySelection;
use crate::shared::icons::icon;
use crate::shared::placeholder::swap_to_placeholder;
use contracts::domain::a001_product::MediaSequence;
use leptos::prelude::*;

/// One button per media entry; clicking selects it without opening the viewer
#[component]
pub fn ThumbnailStrip(
    #[prop(into)] media: Signal<MediaSequence>,
    selection: RwSignal<GallerySelection>,
) -> impl IntoView {
    view! {
        <Show when=move || media.with(|m| !m.is_empty())>
            <div class="thumbnail-strip" role="listbox">
                {move || {
                    media
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            let is_selected = move || selection.with(|s| s.selected_index() == index);
                            let inner = if entry.is_video() {
                                view! {
                                    <div class="thumbnail__video">
                                        <video src=entry.url preload="metadata" muted=true></video>
                                        <span class="thumbnail__play">{icon("play")}</span>
                                    </div>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <img src=entry.url alt="" loading="lazy" on:error=swap_to_placeholder />
                                }
                                .into_any()
                            };
                            view! {
                                <button
                                    class="thumbnail"
                                    class:thumbnail--selected=is_selected
                                    role="option"
                                    aria-selected=move || is_selected().to_string()
                                    on:click=move |_| selection.update(|s| s.select(index))
                                >
                                    {inner}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
