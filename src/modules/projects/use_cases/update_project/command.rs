#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProject {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub budget_hours: Option<f64>,
    pub is_active: bool,
    pub updated_at: i64,
}
