pub mod datetime;
pub mod entities;
