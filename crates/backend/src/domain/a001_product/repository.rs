use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_category::CategoryFilter;

use crate::shared::data::catalog::get_catalog;

/// Products of a category matching the search text, newest first
pub fn list_filtered(category: CategoryFilter, search: Option<&str>) -> anyhow::Result<Vec<Product>> {
    let catalog = get_catalog()?;
    let search = search.unwrap_or_default();

    Ok(catalog
        .products
        .iter()
        .filter(|p| category.includes(p.category_id))
        .filter(|p| p.matches_search(search))
        .cloned()
        .collect())
}

pub fn get_by_id(id: ProductId) -> anyhow::Result<Option<Product>> {
    let catalog = get_catalog()?;
    Ok(catalog.products.iter().find(|p| p.id == id).cloned())
}
