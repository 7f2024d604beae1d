#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegulationItem {
    pub title: String,
    pub details: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegulationTableRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub time_interval: String,
    pub photo_required: bool,
}
