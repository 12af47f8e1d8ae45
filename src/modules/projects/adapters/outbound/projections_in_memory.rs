use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::core::projections::{Mutation, apply};
use crate::modules::projects::use_cases::list_projects::projection::ProjectRow;
use crate::modules::projects::use_cases::list_projects::queries_port::ProjectQueries;
use crate::shared::infrastructure::projection::Projector;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjectProjections {
    rows: RwLock<HashMap<String, ProjectRow>>,
}

impl InMemoryProjectProjections {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Projector<ProjectEvent> for InMemoryProjectProjections {
    async fn project(
        &self,
        stream_id: &str,
        version: i64,
        event: &ProjectEvent,
    ) -> anyhow::Result<()> {
        let last_event_id = Some(format!("{stream_id}:{version}"));
        let mut rows = self.rows.write().await;
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Insert(row) => {
                    rows.insert(row.project_id.clone(), row);
                }
                Mutation::UpdateDetails {
                    project_id,
                    name,
                    description,
                    budget_hours,
                    is_active,
                    updated_at,
                } => {
                    if let Some(row) = rows.get_mut(&project_id) {
                        row.name = name;
                        row.description = description;
                        row.budget_hours = budget_hours;
                        row.is_active = is_active;
                        row.updated_at = updated_at;
                        row.last_event_id = last_event_id.clone();
                    }
                }
                Mutation::ReplaceMembers {
                    project_id,
                    member_ids,
                    updated_at,
                } => {
                    if let Some(row) = rows.get_mut(&project_id) {
                        row.members = member_ids;
                        row.updated_at = updated_at;
                        row.last_event_id = last_event_id.clone();
                    }
                }
                Mutation::Remove { project_id } => {
                    rows.remove(&project_id);
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectQueries for InMemoryProjectProjections {
    async fn get(&self, project_id: &str) -> anyhow::Result<Option<ProjectRow>> {
        Ok(self.rows.read().await.get(project_id).cloned())
    }

    async fn list(&self, include_inactive: bool) -> anyhow::Result<Vec<ProjectRow>> {
        let mut projects: Vec<ProjectRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| include_inactive || row.is_active)
            .cloned()
            .collect();
        projects.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.project_id.cmp(&a.project_id))
        });
        Ok(projects)
    }

    async fn count_active(&self) -> anyhow::Result<u64> {
        Ok(self.rows.read().await.values().filter(|row| row.is_active).count() as u64)
    }
}
