pub mod dashboard;
pub mod employee;
pub mod inventory;
pub mod notification;
pub mod regulation;
pub mod session;
pub mod table;
