use axum::{extract::Path, extract::Query, http::StatusCode, Json};
use contracts::domain::a001_product::{Product, ProductId, ProductListItemDto};
use contracts::domain::a002_category::CategoryFilter;
use contracts::domain::common::AggregateId;
use contracts::shared::pagination::{Paginated, DEFAULT_PAGE_SIZE};
use serde::Deserialize;

use crate::domain::a001_product::service::{self, ProductListQuery};

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// `all` or a category id
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// GET /api/product
pub async fn list_paginated(
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Paginated<ProductListItemDto>>, StatusCode> {
    let category = match query.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(segment) => CategoryFilter::from_route(segment).map_err(|e| {
            tracing::warn!("Bad category filter '{}': {}", segment, e);
            StatusCode::BAD_REQUEST
        })?,
    };

    let list_query = ProductListQuery {
        category,
        search: query.search.filter(|s| !s.trim().is_empty()),
        page: query.page.unwrap_or(1),
        page_size: query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    };

    match service::list_paginated(list_query).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, StatusCode> {
    let id = ProductId::from_string(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::get_by_id(id).await {
        Ok(Some(product)) => Ok(Json(product)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load product {}: {}", id.as_string(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use crate::shared::data::catalog::initialize_catalog;

    fn setup() {
        initialize_catalog(&default_config().unwrap());
    }

    fn query(category: Option<&str>, search: Option<&str>, page: Option<usize>) -> ListProductsQuery {
        ListProductsQuery {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
            page,
            page_size: None,
        }
    }

    #[tokio::test]
    async fn test_list_defaults_and_wire_shape() {
        setup();
        let Json(page) = list_paginated(Query(query(None, Some("  "), None)))
            .await
            .unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.total, 360);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["total_pages"], 3);
        assert!(json["items"][0]["date_added"].is_string());
    }

    #[tokio::test]
    async fn test_bad_category_is_rejected() {
        setup();
        let result = list_paginated(Query(query(Some("phones"), None, None))).await;
        assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_get_by_id_status_codes() {
        setup();
        assert!(get_by_id(Path("1".to_string())).await.is_ok());
        assert_eq!(
            get_by_id(Path("99999".to_string())).await.err(),
            Some(StatusCode::NOT_FOUND)
        );
        assert_eq!(
            get_by_id(Path("abc".to_string())).await.err(),
            Some(StatusCode::BAD_REQUEST)
        );
    }
}
