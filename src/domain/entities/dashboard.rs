use serde::Deserialize;

use crate::domain::entities::inventory::StockRow;
use crate::domain::entities::notification::NotificationRow;
use crate::domain::entities::regulation::RegulationItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Dashboard,
    Regulations,
    Notifications,
    Employees,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub label: String,
    pub badge: Option<usize>,
    pub view: Option<DashboardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub id: String,
    pub lead: String,
    pub badge: Option<String>,
    pub title: String,
    pub subtitle_left: String,
    pub subtitle_right: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentCard {
    pub id: String,
    pub title: String,
    pub source: String,
    pub location: Option<String>,
    pub time_ago: String,
    pub description: String,
    pub picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdueIncidentCard {
    pub id: String,
    pub title: String,
    pub time_label: String,
}

/// Venue point as reported by the API; passed through to the model as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardPoint {
    pub title: String,
    pub online_status: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub page_items: Vec<SidebarItem>,
    pub summary_cards: Vec<SummaryCard>,
    pub regulations: Vec<RegulationItem>,
    pub stock_rows: Vec<StockRow>,
    pub incident_cards: Vec<IncidentCard>,
    pub overdue_incident_cards: Vec<OverdueIncidentCard>,
    pub notification_rows: Vec<NotificationRow>,
    pub dashboard_points: Vec<DashboardPoint>,
    pub selected_point_title: String,
    pub is_selected_point_online: bool,
    pub user_full_name: String,
    pub user_role_title: String,
    pub user_avatar: String,
}
