#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignProjectMembers {
    pub project_id: String,
    pub member_ids: Vec<String>,
    pub assigned_at: i64,
}
