use crate::shared::api_utils::get_json;
use contracts::dashboards::d400_traffic::DashboardResponse;

const BASE_URL: &str = "/api/d400";

pub async fn get_dashboard() -> Result<DashboardResponse, String> {
    get_json(&format!("{}/dashboard", BASE_URL)).await
}
