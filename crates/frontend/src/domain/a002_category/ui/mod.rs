pub mod list;
pub mod products;
