#[derive(Debug, Clone, PartialEq)]
pub struct CreateProject {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub budget_hours: Option<f64>,
    pub created_at: i64,
}
