use crate::domain::a001_product::api;
use crate::shared::api_utils::NOT_FOUND;
use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::common::AggregateId;

/// Load a product by its route segment. `Ok(None)` means there is no such
/// product, either because the id is malformed or the backend answered 404.
pub async fn load_product(id_segment: &str) -> Result<Option<Product>, String> {
    let Ok(id) = ProductId::from_string(id_segment) else {
        return Ok(None);
    };

    match api::fetch_by_id(id).await {
        Ok(product) => Ok(Some(product)),
        Err(e) if e == NOT_FOUND => Ok(None),
        Err(e) => Err(e),
    }
}
