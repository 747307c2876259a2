pub mod aggregate;
pub mod csv_import;
pub mod media;

pub use aggregate::{MarketplaceLink, Product, ProductId, ProductListItemDto};
pub use media::{resolve, MediaEntry, MediaKind, MediaSequence, StorageOrigin};
