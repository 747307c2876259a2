//! In-memory catalog.
//!
//! Built once at startup from the seed generator and never mutated, so
//! handlers read it without locking.

use contracts::domain::a001_product::Product;
use contracts::domain::a002_category::Category;
use once_cell::sync::OnceCell;

use super::seed;
use crate::shared::config::Config;

static CATALOG: OnceCell<Catalog> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Sorted by `date_added`, newest first
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn build(config: &Config) -> Self {
        let mut products = seed::generate_products(config.catalog.product_count, config.catalog.seed);
        products.sort_by(|a, b| b.date_added.cmp(&a.date_added).then(a.id.cmp(&b.id)));

        let categories = seed::categories()
            .into_iter()
            .map(|mut category| {
                category.product_count = products
                    .iter()
                    .filter(|p| p.category_id == category.id)
                    .count();
                category
            })
            .collect();

        Self {
            products,
            categories,
        }
    }
}

/// Build the catalog if it does not exist yet. Repeated calls are no-ops.
pub fn initialize_catalog(config: &Config) -> &'static Catalog {
    let catalog = CATALOG.get_or_init(|| Catalog::build(config));
    tracing::info!(
        "Catalog ready: {} products in {} categories",
        catalog.products.len(),
        catalog.categories.len()
    );
    catalog
}

pub fn get_catalog() -> anyhow::Result<&'static Catalog> {
    CATALOG
        .get()
        .ok_or_else(|| anyhow::anyhow!("catalog is not initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    #[test]
    fn test_build_sorts_newest_first() {
        let catalog = Catalog::build(&default_config().unwrap());
        assert_eq!(catalog.products.len(), 360);
        assert!(catalog
            .products
            .windows(2)
            .all(|w| w[0].date_added >= w[1].date_added));
    }

    #[test]
    fn test_category_counts_cover_all_products() {
        let catalog = Catalog::build(&default_config().unwrap());
        let total: usize = catalog.categories.iter().map(|c| c.product_count).sum();
        assert_eq!(total, catalog.products.len());
    }
}
