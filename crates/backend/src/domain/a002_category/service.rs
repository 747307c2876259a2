use contracts::domain::a002_category::Category;

use crate::shared::data::catalog::get_catalog;

/// All categories with their product counts
pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    Ok(get_catalog()?.categories.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use crate::shared::data::catalog::initialize_catalog;

    #[tokio::test]
    async fn test_list_all() {
        initialize_catalog(&default_config().unwrap());
        let categories = list_all().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].name, "Smartphones");
        assert!(categories.iter().all(|c| c.product_count == 60));
    }
}
