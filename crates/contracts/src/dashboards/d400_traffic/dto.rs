use serde::{Deserialize, Serialize};

/// Period selector on the traffic dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1d")]
    Day,
    #[default]
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1m")]
    Month,
    #[serde(rename = "1y")]
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [TimeRange::Day, TimeRange::Week, TimeRange::Month, TimeRange::Year];

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "1D",
            TimeRange::Week => "1W",
            TimeRange::Month => "1M",
            TimeRange::Year => "1Y",
        }
    }
}

/// Headline number card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTile {
    pub title: String,
    /// Preformatted value, e.g. "45.2K" or "3m 42s"
    pub value: String,
    /// Preformatted change vs. previous period, e.g. "+12.5%"
    pub change: String,
    /// Icon name understood by the frontend icon set
    pub icon: String,
}

/// One point of the traffic area chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficPoint {
    pub label: String,
    pub visits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryVisits {
    pub country: String,
    pub visits: u64,
}

/// Response for `GET /api/d400/dashboard`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: Vec<StatTile>,
    pub traffic: Vec<TrafficPoint>,
    pub top_countries: Vec<CountryVisits>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_wire_format() {
        assert_eq!(serde_json::to_string(&TimeRange::Week).unwrap(), "\"1w\"");
        assert_eq!(
            serde_json::from_str::<TimeRange>("\"1y\"").unwrap(),
            TimeRange::Year
        );
        assert_eq!(TimeRange::default(), TimeRange::Week);
    }
}
