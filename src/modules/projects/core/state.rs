#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub members: Vec<String>,
    pub budget_hours: Option<f64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectState {
    None,
    Existing(Project),
    Deleted,
}
