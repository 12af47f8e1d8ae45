use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::core::events::v1::project_updated::ProjectUpdatedV1;
use crate::modules::projects::core::intents::ProjectIntent;
use crate::modules::projects::core::rules::{normalized_name, valid_budget};
use crate::modules::projects::core::state::ProjectState;
use crate::modules::projects::use_cases::update_project::command::UpdateProject;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only managers and admins can manage projects")]
    NotManager,
    #[error("project not found")]
    NotFound,
    #[error("project name must be between 1 and 200 characters")]
    InvalidName,
    #[error("budget hours cannot be negative")]
    NegativeBudget,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotManager => RejectionKind::Forbidden,
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::InvalidName | DecideError::NegativeBudget => RejectionKind::Invalid,
        }
    }
}

pub fn decide_update_project(
    state: &ProjectState,
    actor: &Actor,
    command: UpdateProject,
) -> Decision<ProjectEvent, ProjectIntent, DecideError> {
    if !actor.is_manager_or_admin() {
        return Decision::reject(DecideError::NotManager);
    }
    let ProjectState::Existing(_) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    let Some(name) = normalized_name(&command.name) else {
        return Decision::reject(DecideError::InvalidName);
    };
    if !valid_budget(command.budget_hours) {
        return Decision::reject(DecideError::NegativeBudget);
    }
    Decision::accept(vec![ProjectEvent::ProjectUpdatedV1(ProjectUpdatedV1 {
        project_id: command.project_id,
        name,
        description: command.description.trim().to_string(),
        budget_hours: command.budget_hours,
        is_active: command.is_active,
        updated_at: command.updated_at,
        updated_by: actor.user_id.clone(),
    })])
}
