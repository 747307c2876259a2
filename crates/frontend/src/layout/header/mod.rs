pub mod header;
pub mod search;

pub use header::Header;
