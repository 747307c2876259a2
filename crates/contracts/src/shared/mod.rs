pub mod config;
pub mod delimited;
pub mod pagination;
pub mod search;
