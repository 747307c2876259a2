use super::repository;
use contracts::domain::a001_product::{Product, ProductId, ProductListItemDto};
use contracts::domain::a002_category::CategoryFilter;
use contracts::shared::pagination::{paginate, Paginated};

/// Listing query after the handler has applied defaults
#[derive(Debug, Clone)]
pub struct ProductListQuery {
    pub category: CategoryFilter,
    pub search: Option<String>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

/// One page of listing cards, newest first
pub async fn list_paginated(query: ProductListQuery) -> anyhow::Result<Paginated<ProductListItemDto>> {
    let products = repository::list_filtered(query.category, query.search.as_deref())?;
    let items: Vec<ProductListItemDto> = products.iter().map(Product::to_list_item).collect();
    Ok(paginate(&items, query.page, query.page_size))
}

pub async fn get_by_id(id: ProductId) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use crate::shared::data::catalog::initialize_catalog;
    use contracts::domain::a002_category::CategoryId;

    fn setup() {
        initialize_catalog(&default_config().unwrap());
    }

    fn query(category: CategoryFilter, search: Option<&str>, page: usize) -> ProductListQuery {
        ProductListQuery {
            category,
            search: search.map(str::to_string),
            page,
            page_size: 120,
        }
    }

    #[tokio::test]
    async fn test_all_products_are_paged_by_120() {
        setup();
        let first = list_paginated(query(CategoryFilter::All, None, 1)).await.unwrap();
        assert_eq!(first.total, 360);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 120);
        assert!(first
            .items
            .windows(2)
            .all(|w| w[0].date_added >= w[1].date_added));

        let third = list_paginated(query(CategoryFilter::All, None, 3)).await.unwrap();
        assert_eq!(third.items.len(), 120);
        assert_eq!(third.page, 3);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        setup();
        let result = list_paginated(query(CategoryFilter::All, Some("yy381"), 1))
            .await
            .unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].name, "YY381");
    }

    #[tokio::test]
    async fn test_category_filter() {
        setup();
        let result = list_paginated(query(CategoryFilter::Only(CategoryId(2)), None, 1))
            .await
            .unwrap();
        assert_eq!(result.total, 60);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        setup();
        let product = get_by_id(ProductId(1)).await.unwrap().unwrap();
        assert_eq!(product.name, "YY381");
        assert!(get_by_id(ProductId(100_000)).await.unwrap().is_none());
    }
}
