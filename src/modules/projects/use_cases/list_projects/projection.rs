use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRow {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub members: Vec<String>,
    pub budget_hours: Option<f64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing)]
    pub last_event_id: Option<String>,
}
