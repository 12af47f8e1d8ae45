use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::core::events::v1::project_members_assigned::ProjectMembersAssignedV1;
use crate::modules::projects::core::intents::ProjectIntent;
use crate::modules::projects::core::state::ProjectState;
use crate::modules::projects::use_cases::assign_project_members::command::AssignProjectMembers;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only admins can assign project members")]
    NotAdmin,
    #[error("project not found")]
    NotFound,
    #[error("unknown users: {}", .0.join(", "))]
    UnknownMembers(Vec<String>),
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotAdmin => RejectionKind::Forbidden,
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::UnknownMembers(_) => RejectionKind::Invalid,
        }
    }
}

/// `unknown_members` lists the requested ids missing from the user directory.
/// The member set is replaced wholesale, deduplicated and sorted.
pub fn decide_assign_project_members(
    state: &ProjectState,
    actor: &Actor,
    command: AssignProjectMembers,
    unknown_members: Vec<String>,
) -> Decision<ProjectEvent, ProjectIntent, DecideError> {
    if !actor.is_admin() {
        return Decision::reject(DecideError::NotAdmin);
    }
    let ProjectState::Existing(_) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    if !unknown_members.is_empty() {
        return Decision::reject(DecideError::UnknownMembers(unknown_members));
    }
    let member_ids: BTreeSet<String> = command.member_ids.into_iter().collect();
    Decision::accept(vec![ProjectEvent::ProjectMembersAssignedV1(
        ProjectMembersAssignedV1 {
            project_id: command.project_id,
            member_ids: member_ids.into_iter().collect(),
            assigned_at: command.assigned_at,
            assigned_by: actor.user_id.clone(),
        },
    )])
}
