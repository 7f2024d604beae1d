use serde::Deserialize;
use thiserror::Error;

use crate::domain::entities::dashboard::DashboardPoint;
use crate::domain::entities::session::LoginCredentials;

/// Data-loading failures are surfaced to the user as plain text and are
/// never retried automatically.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Ошибка сети: {0}")]
    Network(String),
    #[error("{0}")]
    Api(String),
    #[error("Сервер не вернул токен")]
    MissingToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationApiStatus {
    New,
    Cancelled,
    Failed,
    SuccessAfterFailed,
    Success,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiIncident {
    pub id: i64,
    pub status: NotificationApiStatus,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub places: Vec<String>,
    pub picture: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiNotification {
    #[serde(flatten)]
    pub incident: ApiIncident,
    pub device_title: Option<String>,
    pub staff: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiUser {
    pub first_name: String,
    pub last_name: String,
    pub role_title: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ApiVideo {
    pub enabled: bool,
    pub cameras_active: i64,
    pub cameras_total: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ApiAudio {
    pub enabled: bool,
    pub devices_active: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiReglament {
    pub title: String,
    pub description: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiStock {
    pub title: String,
    pub min: i64,
    pub in_stock: i64,
}

/// Full dashboard payload; always delivered whole, never streamed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardApiData {
    pub user: ApiUser,
    pub points: Vec<DashboardPoint>,
    pub video: ApiVideo,
    pub audio: ApiAudio,
    pub reglaments: Vec<ApiReglament>,
    pub stock: Vec<ApiStock>,
    pub active_incidents: Vec<ApiIncident>,
    pub failed_incidents: Vec<ApiIncident>,
    pub notifications: Vec<ApiNotification>,
}

pub trait ApiGateway: Send + Sync {
    fn login(&self, credentials: &LoginCredentials) -> Result<String, SourceError>;
    fn fetch_dashboard(&self, token: &str) -> Result<DashboardApiData, SourceError>;
}
