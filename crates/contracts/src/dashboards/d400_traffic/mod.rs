pub mod dto;

pub use dto::{CountryVisits, DashboardResponse, StatTile, TimeRange, TrafficPoint};
