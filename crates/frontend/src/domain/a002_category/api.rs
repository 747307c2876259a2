use crate::shared::api_utils::get_json;
use contracts::domain::a002_category::Category;

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    get_json("/api/category").await
}
