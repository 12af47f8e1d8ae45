use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::core::events::v1::project_deleted::ProjectDeletedV1;
use crate::modules::projects::core::intents::ProjectIntent;
use crate::modules::projects::core::state::ProjectState;
use crate::modules::projects::use_cases::delete_project::command::DeleteProject;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only admins can delete projects")]
    NotAdmin,
    #[error("project not found")]
    NotFound,
    #[error("cannot delete a project with {0} time entries")]
    HasTimeEntries(usize),
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotAdmin => RejectionKind::Forbidden,
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::HasTimeEntries(_) => RejectionKind::Conflict,
        }
    }
}

/// `entry_count` is the number of time entries currently logged against the
/// project.
pub fn decide_delete_project(
    state: &ProjectState,
    actor: &Actor,
    command: DeleteProject,
    entry_count: usize,
) -> Decision<ProjectEvent, ProjectIntent, DecideError> {
    if !actor.is_admin() {
        return Decision::reject(DecideError::NotAdmin);
    }
    let ProjectState::Existing(_) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    if entry_count > 0 {
        return Decision::reject(DecideError::HasTimeEntries(entry_count));
    }
    let payload = ProjectDeletedV1 {
        project_id: command.project_id,
        deleted_at: command.deleted_at,
        deleted_by: actor.user_id.clone(),
    };
    Decision::Accepted {
        events: vec![ProjectEvent::ProjectDeletedV1(payload.clone())],
        intents: vec![ProjectIntent::PublishProjectDeleted { payload }],
    }
}
