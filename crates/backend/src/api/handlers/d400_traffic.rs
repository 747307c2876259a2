use axum::{http::StatusCode, Json};
use contracts::dashboards::d400_traffic::DashboardResponse;

use crate::dashboards::d400_traffic::service;

/// GET /api/d400/dashboard
pub async fn get_dashboard() -> Result<Json<DashboardResponse>, StatusCode> {
    match service::get_dashboard().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to build traffic dashboard: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
