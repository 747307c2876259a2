use crate::shared::icons::icon;
use contracts::shared::pagination::page_bounds;
use leptos::prelude::*;

/// "Showing 121-240 of 360"
fn range_caption(page: usize, total: usize, page_size: usize) -> String {
    if total == 0 {
        return "No items".to_string();
    }
    let (start, end) = page_bounds(page, total, page_size);
    format!("Showing {}-{} of {}", start + 1, end, total)
}

/// First/previous/next/last controls over 1-based pages
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    /// Called with the requested 1-based page
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-caption">
                {move || range_caption(current_page.get(), total_count.get(), page_size.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run((current_page.get() + 1).min(total_pages.get().max(1)))
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_caption() {
        assert_eq!(range_caption(1, 360, 120), "Showing 1-120 of 360");
        assert_eq!(range_caption(3, 360, 120), "Showing 241-360 of 360");
        assert_eq!(range_caption(2, 130, 120), "Showing 121-130 of 130");
        assert_eq!(range_caption(1, 0, 120), "No items");
    }
}
