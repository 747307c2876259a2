//! Traffic dashboard.
//!
//! There is no analytics source behind the storefront yet, the figures are a
//! fixed sample.

use contracts::dashboards::d400_traffic::{CountryVisits, DashboardResponse, StatTile, TrafficPoint};

pub async fn get_dashboard() -> anyhow::Result<DashboardResponse> {
    let stats = [
        ("Total Visitors", "45.2K", "+12.5%", "users"),
        ("Avg. Time", "3m 42s", "+8.2%", "clock"),
        ("Countries", "92", "+3.1%", "globe"),
        ("Total Pages", "845", "+5.4%", "file-text"),
    ]
    .into_iter()
    .map(|(title, value, change, icon)| StatTile {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        icon: icon.into(),
    })
    .collect();

    let traffic = [
        ("Jan", 4000),
        ("Feb", 3000),
        ("Mar", 5000),
        ("Apr", 2780),
        ("May", 1890),
        ("Jun", 2390),
        ("Jul", 3490),
    ]
    .into_iter()
    .map(|(label, visits)| TrafficPoint {
        label: label.into(),
        visits,
    })
    .collect();

    let top_countries = [
        ("United States", 12500),
        ("United Kingdom", 8300),
        ("Germany", 6200),
        ("France", 5100),
        ("India", 4800),
    ]
    .into_iter()
    .map(|(country, visits)| CountryVisits {
        country: country.into(),
        visits,
    })
    .collect();

    Ok(DashboardResponse {
        stats,
        traffic,
        top_countries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_shape() {
        let dashboard = get_dashboard().await.unwrap();
        assert_eq!(dashboard.stats.len(), 4);
        assert_eq!(dashboard.traffic.len(), 7);
        assert!(dashboard
            .top_countries
            .windows(2)
            .all(|w| w[0].visits >= w[1].visits));
    }
}
