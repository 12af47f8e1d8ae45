use crate::modules::projects::core::events::v1::project_created::ProjectCreatedV1;
use crate::modules::projects::core::events::v1::project_deleted::ProjectDeletedV1;

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectIntent {
    PublishProjectCreated { payload: ProjectCreatedV1 },
    PublishProjectDeleted { payload: ProjectDeletedV1 },
}
