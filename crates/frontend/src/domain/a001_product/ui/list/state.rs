use contracts::shared::pagination::DEFAULT_PAGE_SIZE;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    // Server-side pagination, 1-based
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,

    pub is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_count: 0,
            total_pages: 0,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
