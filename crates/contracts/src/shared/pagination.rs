//! Page arithmetic shared by the listing endpoints and the listing screens.
//!
//! Pages are 1-based, as they appear in the UI.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamp a requested page into `[1, total_pages]` (page 1 when there is nothing to show)
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(total, page_size).max(1))
}

/// Half-open index range `[start, end)` of `page` within `total` items
pub fn page_bounds(page: usize, total: usize, page_size: usize) -> (usize, usize) {
    let page = clamp_page(page, total, page_size);
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    (start, end)
}

/// Cut one page out of an already sorted list
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Paginated<T> {
    let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
    let total = items.len();
    let page = clamp_page(page, total, page_size);
    let (start, end) = page_bounds(page, total, page_size);

    Paginated {
        items: items[start..end].to_vec(),
        total,
        page,
        page_size,
        total_pages: total_pages(total, page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_360_items_at_120_per_page() {
        let items: Vec<usize> = (0..360).collect();
        assert_eq!(total_pages(items.len(), 120), 3);

        let first = paginate(&items, 1, 120);
        assert_eq!(first.items, (0..120).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);

        let third = paginate(&items, 3, 120);
        assert_eq!(third.items, (240..360).collect::<Vec<_>>());
        assert_eq!(third.page, 3);
    }

    #[test]
    fn test_partial_last_page() {
        let items: Vec<usize> = (0..250).collect();
        let last = paginate(&items, 3, 120);
        assert_eq!(last.items.len(), 10);
        assert_eq!(last.items[0], 240);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items: Vec<usize> = (0..10).collect();
        assert_eq!(paginate(&items, 0, 4).page, 1);
        assert_eq!(paginate(&items, 99, 4).page, 3);
        assert_eq!(paginate(&items, 99, 4).items, vec![8, 9]);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 1, 120);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }
}
