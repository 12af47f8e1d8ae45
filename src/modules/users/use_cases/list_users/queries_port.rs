use crate::modules::users::use_cases::list_users::projection::UserRow;
use crate::shared::core::actor::Role;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    pub q: Option<String>,
    pub role: Option<Role>,
}

impl UserFilter {
    /// `q` matches username, email, first or last name, ignoring case.
    pub fn matches(&self, row: &UserRow) -> bool {
        if self.role.is_some_and(|role| row.role != role) {
            return false;
        }
        match self.q.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let q = q.to_lowercase();
                [&row.username, &row.email, &row.first_name, &row.last_name]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&q))
            }
        }
    }
}

#[async_trait]
pub trait UserQueries: Send + Sync {
    async fn get(&self, user_id: &str) -> anyhow::Result<Option<UserRow>>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>>;
    /// Matching users ordered by username.
    async fn list(&self, filter: &UserFilter) -> anyhow::Result<Vec<UserRow>>;
}
