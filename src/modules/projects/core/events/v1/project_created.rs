use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectCreatedV1 {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub budget_hours: Option<f64>,
    pub created_at: i64,
    pub created_by: String,
}
