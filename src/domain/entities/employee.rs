#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeRole {
    Admin,
    Owner,
    Manager,
}

impl EmployeeRole {
    pub fn label(self) -> &'static str {
        match self {
            EmployeeRole::Admin => "Админ",
            EmployeeRole::Owner => "Владелец",
            EmployeeRole::Manager => "Менеджер",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub role: EmployeeRole,
    pub phone: String,
    pub tg_connected: bool,
    pub activity: String,
}
