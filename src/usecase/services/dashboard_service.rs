use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::entities::dashboard::{
    DashboardModel, IncidentCard, OverdueIncidentCard, SidebarItem, SummaryCard,
};
use crate::domain::entities::inventory::StockRow;
use crate::domain::entities::notification::{IncidentKind, MediaTone, NotificationRow, StatusTone};
use crate::domain::entities::regulation::RegulationItem;
use crate::usecase::ports::gateway::{
    ApiGateway, ApiIncident, DashboardApiData, NotificationApiStatus, SourceError,
};

/// Proof of which load is the newest one. Completing a fetch against a
/// stale ticket commits nothing, so an abandoned load never mutates
/// consumer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

pub struct DashboardService {
    gateway: Arc<dyn ApiGateway>,
    generation: AtomicU64,
}

impl DashboardService {
    pub fn new(gateway: Arc<dyn ApiGateway>) -> Self {
        Self {
            gateway,
            generation: AtomicU64::new(0),
        }
    }

    /// Starts a new load and invalidates every earlier ticket.
    pub fn begin_load(&self) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket { generation }
    }

    /// Invalidates in-flight loads on view teardown.
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// `Ok(None)` means the load was superseded while in flight and its
    /// result must be dropped.
    pub fn load_dashboard(
        &self,
        ticket: LoadTicket,
        token: &str,
    ) -> Result<Option<DashboardModel>, SourceError> {
        let data = self.gateway.fetch_dashboard(token);

        if self.generation.load(Ordering::SeqCst) != ticket.generation {
            tracing::debug!("dashboard load superseded, dropping result");
            return Ok(None);
        }

        Ok(Some(build_dashboard_model(data?)))
    }
}

pub fn resolve_incident_kind(kind: &str) -> IncidentKind {
    match kind {
        "camera" => IncidentKind::Camera,
        "audio" => IncidentKind::Audio,
        _ => IncidentKind::Reglament,
    }
}

pub fn resolve_notification_status(status: NotificationApiStatus) -> (&'static str, StatusTone) {
    match status {
        NotificationApiStatus::Cancelled => ("Ложное", StatusTone::Amber),
        NotificationApiStatus::Failed => ("Просрочено", StatusTone::Red),
        NotificationApiStatus::SuccessAfterFailed | NotificationApiStatus::Success => {
            ("Решено", StatusTone::Gray)
        }
        NotificationApiStatus::New | NotificationApiStatus::Unknown => {
            ("Новое", StatusTone::Green)
        }
    }
}

fn create_page_items(notifications_badge: Option<usize>) -> Vec<SidebarItem> {
    use crate::domain::entities::dashboard::DashboardView;

    vec![
        SidebarItem {
            label: "Регламенты".to_string(),
            badge: None,
            view: Some(DashboardView::Regulations),
        },
        SidebarItem {
            label: "Аналитика".to_string(),
            badge: None,
            view: None,
        },
        SidebarItem {
            label: "Аудио-аналитика".to_string(),
            badge: None,
            view: None,
        },
        SidebarItem {
            label: "Уведомления".to_string(),
            badge: notifications_badge,
            view: None,
        },
        SidebarItem {
            label: "Сотрудники".to_string(),
            badge: None,
            view: None,
        },
        SidebarItem {
            label: "Витрина и склад".to_string(),
            badge: None,
            view: None,
        },
    ]
}

fn incident_card(item: &ApiIncident) -> IncidentCard {
    let kind = resolve_incident_kind(&item.kind);

    IncidentCard {
        id: item.id.to_string(),
        title: item.title.clone(),
        source: kind.label().to_string(),
        location: if item.places.is_empty() {
            None
        } else {
            Some(item.places.join(", "))
        },
        time_ago: format!("#{}", item.id),
        description: item.description.clone(),
        picture_url: item.picture.clone(),
    }
}

pub fn build_dashboard_model(data: DashboardApiData) -> DashboardModel {
    let notifications_badge = data
        .notifications
        .iter()
        .filter(|item| item.incident.status == NotificationApiStatus::New)
        .count();

    let active_point = data.points.iter().find(|point| point.is_active);
    let selected_point_title = active_point
        .or_else(|| data.points.first())
        .map(|point| point.title.clone())
        .unwrap_or_default();
    let is_selected_point_online = active_point
        .map(|point| point.online_status)
        .unwrap_or(false);

    let summary_cards = vec![
        SummaryCard {
            id: "cameras".to_string(),
            lead: data.video.cameras_active.to_string(),
            badge: data.video.enabled.then(|| "Подключено".to_string()),
            title: "Камеры".to_string(),
            subtitle_left: format!("{}/{}", data.video.cameras_active, data.video.cameras_total),
            subtitle_right: "включены в помещении".to_string(),
        },
        SummaryCard {
            id: "audio".to_string(),
            lead: if data.audio.enabled { "on" } else { "off" }.to_string(),
            badge: None,
            title: "Аудио аналитика".to_string(),
            subtitle_left: data.audio.devices_active.to_string(),
            subtitle_right: if data.audio.enabled {
                "подключено"
            } else {
                "не подключено"
            }
            .to_string(),
        },
    ];

    let notification_rows = data
        .notifications
        .iter()
        .map(|item| {
            let kind = resolve_incident_kind(&item.incident.kind);
            let (status_label, status_tone) = resolve_notification_status(item.incident.status);
            let first_place = item.incident.places.first().map(String::as_str);

            NotificationRow {
                id: format!("#{}", item.incident.id),
                status: status_label.to_string(),
                status_tone,
                workplace: first_place.unwrap_or("—").to_string(),
                incident_name: item.incident.title.clone(),
                description: item.incident.description.clone(),
                date_time: "— / —".to_string(),
                assignee: item.staff.clone(),
                kind,
                type_label: kind.label().to_string(),
                camera: item
                    .device_title
                    .as_deref()
                    .or(first_place)
                    .unwrap_or("—")
                    .to_string(),
                media_tone: match item.incident.picture {
                    Some(_)
                        if matches!(
                            item.incident.status,
                            NotificationApiStatus::Failed
                                | NotificationApiStatus::SuccessAfterFailed
                        ) =>
                    {
                        MediaTone::Blue
                    }
                    Some(_) => MediaTone::Gray,
                    None => MediaTone::None,
                },
            }
        })
        .collect();

    DashboardModel {
        page_items: create_page_items(Some(notifications_badge)),
        summary_cards,
        regulations: data
            .reglaments
            .iter()
            .map(|item| RegulationItem {
                title: item.title.clone(),
                details: item.description.clone(),
                time: item.time.clone(),
            })
            .collect(),
        stock_rows: data
            .stock
            .iter()
            .map(|item| StockRow {
                name: item.title.clone(),
                min_stock: item.min,
                showcase_stock: item.in_stock,
                warehouse_stock: None,
            })
            .collect(),
        incident_cards: data.active_incidents.iter().map(incident_card).collect(),
        overdue_incident_cards: data
            .failed_incidents
            .iter()
            .map(|item| OverdueIncidentCard {
                id: item.id.to_string(),
                title: item.title.clone(),
                time_label: format!("#{}", item.id),
            })
            .collect(),
        notification_rows,
        selected_point_title,
        is_selected_point_online,
        user_full_name: format!("{} {}", data.user.first_name, data.user.last_name),
        user_role_title: data.user.role_title.clone(),
        user_avatar: data.user.avatar.clone(),
        dashboard_points: data.points,
    }
}
