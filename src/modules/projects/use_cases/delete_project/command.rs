#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProject {
    pub project_id: String,
    pub deleted_at: i64,
}
