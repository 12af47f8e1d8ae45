use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectDeletedV1 {
    pub project_id: String,
    pub deleted_at: i64,
    pub deleted_by: String,
}
