use crate::domain::a001_product::ui::list::PagedProducts;
use crate::domain::a002_category::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_category::{Category, CategoryFilter};
use contracts::shared::search::SEARCH_PARAM;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_params_map, use_query_map};

fn page_title(filter: CategoryFilter, categories: &[Category], search: Option<&str>) -> String {
    let scope = match filter {
        CategoryFilter::All => "All products".to_string(),
        CategoryFilter::Only(id) => categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Category".to_string()),
    };
    match search {
        Some(text) => format!("{}: \"{}\"", scope, text),
        None => scope,
    }
}

/// `/category/:id?search=...`
#[component]
pub fn CategoryProducts() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) => set_categories.set(list),
            Err(e) => log::error!("Failed to load categories: {}", e),
        }
    });

    let filter = Memo::new(move |_| {
        let segment = params.read().get("id").unwrap_or_default();
        CategoryFilter::from_route(&segment)
    });
    let search = Memo::new(move |_| {
        query
            .read()
            .get(SEARCH_PARAM)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    });

    let title = move || match filter.get() {
        Ok(f) => categories.with(|list| page_title(f, list, search.get().as_deref())),
        Err(_) => "Unknown category".to_string(),
    };

    view! {
        <PageFrame page_id="a002_category--products" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(title) />
            {move || match filter.get() {
                Ok(f) => view! { <PagedProducts category=f search=search.get() /> }.into_any(),
                Err(e) => view! {
                    <div class="page__content">
                        <div class="alert alert--error">{e}</div>
                    </div>
                }.into_any(),
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::CategoryId;

    fn category(id: u32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.into(),
            product_count: 0,
            image: String::new(),
            gradient: String::new(),
        }
    }

    #[test]
    fn test_page_title() {
        let list = vec![category(1, "Smartphones"), category(2, "Laptops")];
        assert_eq!(page_title(CategoryFilter::All, &list, None), "All products");
        assert_eq!(
            page_title(CategoryFilter::Only(CategoryId::new(2)), &list, None),
            "Laptops"
        );
        assert_eq!(
            page_title(CategoryFilter::All, &list, Some("yy3")),
            "All products: \"yy3\""
        );
        assert_eq!(
            page_title(CategoryFilter::Only(CategoryId::new(9)), &list, None),
            "Category"
        );
    }
}
