use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserActivationChangedV1 {
    pub user_id: String,
    pub is_active: bool,
    pub changed_at: i64,
    pub changed_by: String,
}
