use crate::modules::projects::use_cases::list_projects::projection::ProjectRow;
use async_trait::async_trait;

#[async_trait]
pub trait ProjectQueries: Send + Sync {
    async fn get(&self, project_id: &str) -> anyhow::Result<Option<ProjectRow>>;
    /// Newest first. Inactive projects are left out unless asked for.
    async fn list(&self, include_inactive: bool) -> anyhow::Result<Vec<ProjectRow>>;
    async fn count_active(&self) -> anyhow::Result<u64>;
}
