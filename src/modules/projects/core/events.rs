pub mod v1 {
    pub mod project_created;
    pub mod project_deleted;
    pub mod project_members_assigned;
    pub mod project_updated;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ProjectEvent {
    ProjectCreatedV1(v1::project_created::ProjectCreatedV1),
    ProjectUpdatedV1(v1::project_updated::ProjectUpdatedV1),
    ProjectMembersAssignedV1(v1::project_members_assigned::ProjectMembersAssignedV1),
    ProjectDeletedV1(v1::project_deleted::ProjectDeletedV1),
}
