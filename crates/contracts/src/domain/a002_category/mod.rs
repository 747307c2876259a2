pub mod aggregate;

pub use aggregate::{Category, CategoryFilter, CategoryId, CATEGORY_ALL};
