use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectUpdatedV1 {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub budget_hours: Option<f64>,
    pub is_active: bool,
    pub updated_at: i64,
    pub updated_by: String,
}
