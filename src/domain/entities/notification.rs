#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Amber,
    Red,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTone {
    Gray,
    Blue,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentKind {
    Camera,
    Reglament,
    Audio,
}

impl IncidentKind {
    pub fn label(self) -> &'static str {
        match self {
            IncidentKind::Camera => "Камера",
            IncidentKind::Audio => "Аудио",
            IncidentKind::Reglament => "Регламент",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub id: String,
    pub status: String,
    pub status_tone: StatusTone,
    pub workplace: String,
    pub incident_name: String,
    pub description: String,
    pub date_time: String,
    pub assignee: String,
    pub kind: IncidentKind,
    pub type_label: String,
    pub camera: String,
    pub media_tone: MediaTone,
}
