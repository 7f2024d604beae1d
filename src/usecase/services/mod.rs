pub mod auth_service;
pub mod dashboard_service;
