use crate::shared::core::actor::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserProfile {
    pub user_id: String,
    pub role: Role,
    pub department: String,
    pub updated_at: i64,
}
