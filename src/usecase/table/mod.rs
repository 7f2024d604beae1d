pub mod adapter;
pub mod adapters;
pub mod engine;
pub mod filter;
pub mod paginate;
pub mod sort;
