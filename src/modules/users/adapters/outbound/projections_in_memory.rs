use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::projections::{Mutation, apply};
use crate::modules::users::use_cases::list_users::projection::UserRow;
use crate::modules::users::use_cases::list_users::queries_port::{UserFilter, UserQueries};
use crate::shared::infrastructure::projection::Projector;
use anyhow::bail;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserProjections {
    rows: RwLock<HashMap<String, UserRow>>,
    is_offline: bool,
}

impl InMemoryUserProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            bail!("Projections repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl Projector<UserEvent> for InMemoryUserProjections {
    async fn project(&self, stream_id: &str, version: i64, event: &UserEvent) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Insert(row) => {
                    rows.insert(row.user_id.clone(), row);
                }
                Mutation::UpdateProfile {
                    user_id,
                    role,
                    department,
                    updated_at,
                } => {
                    if let Some(row) = rows.get_mut(&user_id) {
                        row.role = role;
                        row.department = department;
                        row.updated_at = updated_at;
                        row.last_event_id = Some(format!("{stream_id}:{version}"));
                    }
                }
                Mutation::SetActive {
                    user_id,
                    is_active,
                    updated_at,
                } => {
                    if let Some(row) = rows.get_mut(&user_id) {
                        row.is_active = is_active;
                        row.updated_at = updated_at;
                        row.last_event_id = Some(format!("{stream_id}:{version}"));
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UserQueries for InMemoryUserProjections {
    async fn get(&self, user_id: &str) -> anyhow::Result<Option<UserRow>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|row| row.username == username)
            .cloned())
    }

    async fn list(&self, filter: &UserFilter) -> anyhow::Result<Vec<UserRow>> {
        self.ensure_online()?;
        let mut users: Vec<UserRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[cfg(test)]
mod in_memory_user_projections_tests {
    use super::*;
    use crate::modules::users::core::events::v1::user_activation_changed::UserActivationChangedV1;
    use crate::shared::core::actor::Role;
    use crate::tests::fixtures::events::users::make_user_registered_v1_event;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_project_registrations_and_activation_changes() {
        let projections = InMemoryUserProjections::new();
        for (id, name) in [("u-2", "zed"), ("u-1", "amy")] {
            let event = UserEvent::UserRegisteredV1(make_user_registered_v1_event(id, name, Role::Worker));
            projections.project(&format!("User-{id}"), 1, &event).await.unwrap();
        }
        let event = UserEvent::UserActivationChangedV1(UserActivationChangedV1 {
            user_id: "u-2".into(),
            is_active: false,
            changed_at: 7,
            changed_by: "admin".into(),
        });
        projections.project("User-u-2", 2, &event).await.unwrap();

        let listed = projections.list(&UserFilter::default()).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|row| row.username.as_str()).collect();
        assert_eq!(names, vec!["amy", "zed"]);
        let zed = projections.find_by_username("zed").await.unwrap().unwrap();
        assert!(!zed.is_active);
        assert_eq!(zed.last_event_id.as_deref(), Some("User-u-2:2"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let mut projections = InMemoryUserProjections::new();
        projections.toggle_offline();
        let result = projections.get("u-1").await;
        assert_eq!(result.unwrap_err().to_string(), "Projections repository offline");
    }
}
