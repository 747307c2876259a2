use serde::{Deserialize, Serialize};

use crate::domain::a001_product::StorageOrigin;

/// Client-visible settings served by `GET /api/config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfigDto {
    pub storage_origin: String,
}

impl StorefrontConfigDto {
    pub fn storage_origin(&self) -> StorageOrigin {
        StorageOrigin::new(self.storage_origin.clone())
    }
}
