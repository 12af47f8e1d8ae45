use crate::shared::core::actor::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub department: String,
    pub is_active: bool,
    pub registered_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserState {
    None,
    Registered(UserAccount),
}
