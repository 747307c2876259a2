use axum::{http::StatusCode, Json};
use contracts::shared::config::StorefrontConfigDto;

use crate::shared::config::app_config;

/// GET /api/config
pub async fn get_config() -> Result<Json<StorefrontConfigDto>, StatusCode> {
    let config = app_config().map_err(|e| {
        tracing::error!("Failed to read storefront config: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(Json(StorefrontConfigDto {
        storage_origin: config.storage.origin.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{default_config, set_app_config};

    #[tokio::test]
    async fn test_config_exposes_storage_origin() {
        let config = set_app_config(default_config().unwrap());
        let Json(dto) = get_config().await.unwrap();
        assert_eq!(dto.storage_origin, config.storage.origin);

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains("storage_origin"));
    }
}
