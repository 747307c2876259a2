// Aggregate handlers
pub mod a001_product;
pub mod a002_category;

// Dashboard handlers
pub mod d400_traffic;

// Client configuration
pub mod storefront_config;
