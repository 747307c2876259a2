use crate::shared::api_utils::get_json;
use contracts::domain::a001_product::{Product, ProductId, ProductListItemDto};
use contracts::domain::a002_category::CategoryFilter;
use contracts::shared::pagination::{Paginated, DEFAULT_PAGE_SIZE};
use serde::Serialize;

const BASE_URL: &str = "/api/product";

/// Query string of `GET /api/product`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPageQuery {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl ProductPageQuery {
    pub fn new(category: CategoryFilter, search: Option<String>, page: usize) -> Self {
        Self {
            category: category.as_route(),
            search: search.filter(|s| !s.trim().is_empty()),
            page,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn to_path(&self) -> Result<String, String> {
        let query = serde_qs::to_string(self).map_err(|e| format!("Bad query: {}", e))?;
        Ok(format!("{}?{}", BASE_URL, query))
    }
}

pub async fn fetch_page(query: &ProductPageQuery) -> Result<Paginated<ProductListItemDto>, String> {
    get_json(&query.to_path()?).await
}

pub async fn fetch_by_id(id: ProductId) -> Result<Product, String> {
    get_json(&format!("{}/{}", BASE_URL, id.value())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::CategoryId;

    #[test]
    fn test_query_path() {
        let query = ProductPageQuery::new(CategoryFilter::All, None, 2);
        assert_eq!(
            query.to_path().unwrap(),
            "/api/product?category=all&page=2&page_size=120"
        );

        let query = ProductPageQuery::new(
            CategoryFilter::Only(CategoryId::new(3)),
            Some("red shoe".into()),
            1,
        );
        let path = query.to_path().unwrap();
        assert!(path.starts_with("/api/product?category=3&search=red"));
        assert!(path.ends_with("&page=1&page_size=120"));
    }

    #[test]
    fn test_blank_search_is_dropped() {
        let query = ProductPageQuery::new(CategoryFilter::All, Some("  ".into()), 1);
        assert_eq!(query.search, None);
    }
}
