use super::media_view::MediaView;
use super::state::{Direction, GallerySelection};
use crate::shared::icons::icon;
use contracts::domain::a001_product::{MarketplaceLink, MediaSequence};
use leptos::ev;
use leptos::prelude::*;

/// Product info shown next to the media in the viewer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewerDetails {
    pub name: String,
    pub description: Option<String>,
    pub links: Vec<MarketplaceLink>,
}

/// Viewer action bound to a key, if any
fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::Close),
        "ArrowLeft" => Some(KeyAction::Step(Direction::Previous)),
        "ArrowRight" => Some(KeyAction::Step(Direction::Next)),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyAction {
    Close,
    Step(Direction),
}

#[component]
pub fn FullscreenViewer(
    #[prop(into)] media: Signal<MediaSequence>,
    selection: RwSignal<GallerySelection>,
    details: ViewerDetails,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if !selection.with_untracked(|s| s.is_viewer_open()) {
            return;
        }
        match key_action(&event.key()) {
            Some(KeyAction::Close) => selection.update(|s| s.close()),
            Some(KeyAction::Step(direction)) => {
                event.prevent_default();
                selection.update(|s| s.step(direction));
            }
            None => {}
        }
    });
    on_cleanup(move || handle.remove());

    let current = move || {
        let index = selection.with(|s| s.selected_index());
        media.with(|m| m.get(index).cloned())
    };
    let has_many = move || media.with(|m| m.len() > 1);

    let close = move |_| selection.update(|s| s.close());
    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    let ViewerDetails {
        name,
        description,
        links,
    } = details;

    view! {
        <Show when=move || selection.with(|s| s.is_viewer_open())>
            <div class="viewer-overlay" on:click=close>
                <div class="viewer" on:click=stop_propagation>
                    <button class="button button--icon viewer__close" title="Close" on:click=close>
                        {icon("x")}
                    </button>

                    <div class="viewer__stage">
                        <Show when=has_many>
                            <button
                                class="button button--icon viewer__nav viewer__nav--prev"
                                title="Previous"
                                on:click=move |_| selection.update(|s| s.step(Direction::Previous))
                            >
                                {icon("chevron-left")}
                            </button>
                        </Show>

                        {move || current().map(|entry| view! {
                            <MediaView entry=entry controls=true class="viewer__media" />
                        })}

                        <Show when=has_many>
                            <button
                                class="button button--icon viewer__nav viewer__nav--next"
                                title="Next"
                                on:click=move |_| selection.update(|s| s.step(Direction::Next))
                            >
                                {icon("chevron-right")}
                            </button>
                        </Show>

                        <div class="viewer__caption">{move || selection.with(|s| s.caption())}</div>
                    </div>

                    <aside class="viewer__panel">
                        <h2 class="viewer__title">{name.clone()}</h2>
                        {description.clone().map(|d| view! { <p class="viewer__description">{d}</p> })}
                        <div class="viewer__links">
                            {links
                                .clone()
                                .into_iter()
                                .map(|link| view! {
                                    <a class="button button--secondary" href=link.url target="_blank" rel="noopener noreferrer">
                                        {icon("external-link")}
                                        <span>{link.label}</span>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </aside>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_action("Escape"), Some(KeyAction::Close));
        assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Step(Direction::Previous)));
        assert_eq!(key_action("ArrowRight"), Some(KeyAction::Step(Direction::Next)));
        assert_eq!(key_action("Enter"), None);
    }
}
