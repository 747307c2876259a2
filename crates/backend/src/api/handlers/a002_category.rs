use axum::{http::StatusCode, Json};
use contracts::domain::a002_category::Category;

use crate::domain::a002_category::service;

/// GET /api/category
pub async fn list_all() -> Result<Json<Vec<Category>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list categories: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
