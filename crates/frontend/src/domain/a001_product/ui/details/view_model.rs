//! ViewModel for the product detail page
//!
//! Owns the loaded product, its resolved media sequence and the gallery
//! selection shared by the thumbnail strip and the fullscreen viewer.

use super::gallery::state::GallerySelection;
use super::model;
use crate::layout::global_context::use_app_context;
use crate::shared::api_utils::api_base;
use contracts::domain::a001_product::{resolve, MediaSequence, Product, StorageOrigin};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    NotFound,
    Failed,
}

/// Hands out a token per `load` call. Only the response for the latest
/// token may touch the view model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    pub product: RwSignal<Option<Product>>,
    pub media: Memo<MediaSequence>,
    pub selection: RwSignal<GallerySelection>,
    pub load_state: RwSignal<LoadState>,
    pub error: RwSignal<Option<String>>,
    requests: StoredValue<RequestSeq>,
}

impl ProductDetailsVm {
    pub fn new() -> Self {
        let ctx = use_app_context();
        let product = RwSignal::new(None::<Product>);

        // Falls back to the API host until `/api/config` has answered
        let media = Memo::new(move |_| {
            let origin = ctx
                .storage_origin
                .get()
                .unwrap_or_else(|| StorageOrigin::new(api_base()));
            product.with(|p| p.as_ref().map(|p| resolve(p, &origin)).unwrap_or_default())
        });

        let selection = RwSignal::new(GallerySelection::default());

        // Keep the selection valid for whatever sequence is on screen
        Effect::new(move |_| {
            let len = media.with(|m| m.len());
            selection.update(|s| s.sync_len(len));
        });

        Self {
            product,
            media,
            selection,
            load_state: RwSignal::new(LoadState::Loading),
            error: RwSignal::new(None),
            requests: StoredValue::new(RequestSeq::default()),
        }
    }

    /// Fetch the product for a route segment and reset the gallery
    pub fn load(&self, id_segment: String) {
        let this = *self;
        let token = this.requests.try_update_value(|seq| seq.begin()).unwrap_or_default();
        this.load_state.set(LoadState::Loading);
        this.error.set(None);
        this.selection.update(|s| {
            s.close();
            s.select(0);
        });

        spawn_local(async move {
            let result = model::load_product(&id_segment).await;
            // The route may have moved on to another product meanwhile
            let current = this.requests.try_with_value(|seq| seq.is_current(token));
            if current != Some(true) {
                log::debug!("Dropping stale response for product {}", id_segment);
                return;
            }
            match result {
                Ok(Some(product)) => {
                    this.product.set(Some(product));
                    this.load_state.set(LoadState::Loaded);
                }
                Ok(None) => {
                    this.product.set(None);
                    this.load_state.set(LoadState::NotFound);
                }
                Err(e) => {
                    log::error!("Failed to load product {}: {}", id_segment, e);
                    this.product.set(None);
                    this.error.set(Some(e));
                    this.load_state.set(LoadState::Failed);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_request_is_stale() {
        let mut seq = RequestSeq::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_reload_of_same_product_gets_new_token() {
        let mut seq = RequestSeq::default();
        let a = seq.begin();
        let b = seq.begin();
        assert_ne!(a, b);
        assert!(seq.is_current(b));
    }
}
