use axum::{routing::get, Router};

use crate::api::handlers;

/// All API routes of the storefront
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/config", get(handlers::storefront_config::get_config))
        // Products
        .route("/api/product", get(handlers::a001_product::list_paginated))
        .route("/api/product/:id", get(handlers::a001_product::get_by_id))
        // Categories
        .route("/api/category", get(handlers::a002_category::list_all))
        // D400 Traffic dashboard
        .route("/api/d400/dashboard", get(handlers::d400_traffic::get_dashboard))
}
