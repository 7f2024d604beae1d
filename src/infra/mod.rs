pub mod api;
pub mod config;
pub mod export;
pub mod fixtures;
pub mod store;
