use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectMembersAssignedV1 {
    pub project_id: String,
    pub member_ids: Vec<String>,
    pub assigned_at: i64,
    pub assigned_by: String,
}
