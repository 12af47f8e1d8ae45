use crate::shared::core::actor::{Actor, Role};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
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
    #[serde(skip_serializing)]
    pub last_event_id: Option<String>,
}

impl UserRow {
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        match full.trim() {
            "" => self.username.clone(),
            trimmed => trimmed.to_string(),
        }
    }

    pub fn as_actor(&self) -> Actor {
        Actor::new(&self.user_id, &self.username, self.role)
    }
}
