pub mod details;
pub mod grid;
pub mod list;
pub mod manage;
