use crate::shared::core::actor::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfileUpdatedV1 {
    pub user_id: String,
    pub role: Role,
    pub department: String,
    pub updated_at: i64,
    pub updated_by: String,
}
