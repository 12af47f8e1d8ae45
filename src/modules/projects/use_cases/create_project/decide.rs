use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::core::events::v1::project_created::ProjectCreatedV1;
use crate::modules::projects::core::intents::ProjectIntent;
use crate::modules::projects::core::rules::{normalized_name, valid_budget};
use crate::modules::projects::core::state::ProjectState;
use crate::modules::projects::use_cases::create_project::command::CreateProject;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only managers and admins can manage projects")]
    NotManager,
    #[error("project name must be between 1 and 200 characters")]
    InvalidName,
    #[error("budget hours cannot be negative")]
    NegativeBudget,
    #[error("project already exists")]
    AlreadyExists,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotManager => RejectionKind::Forbidden,
            DecideError::InvalidName | DecideError::NegativeBudget => RejectionKind::Invalid,
            DecideError::AlreadyExists => RejectionKind::Conflict,
        }
    }
}

pub fn decide_create_project(
    state: &ProjectState,
    actor: &Actor,
    command: CreateProject,
) -> Decision<ProjectEvent, ProjectIntent, DecideError> {
    if !actor.is_manager_or_admin() {
        return Decision::reject(DecideError::NotManager);
    }
    if !matches!(state, ProjectState::None) {
        return Decision::reject(DecideError::AlreadyExists);
    }
    let Some(name) = normalized_name(&command.name) else {
        return Decision::reject(DecideError::InvalidName);
    };
    if !valid_budget(command.budget_hours) {
        return Decision::reject(DecideError::NegativeBudget);
    }

    let payload = ProjectCreatedV1 {
        project_id: command.project_id,
        name,
        description: command.description.trim().to_string(),
        budget_hours: command.budget_hours,
        created_at: command.created_at,
        created_by: actor.user_id.clone(),
    };
    Decision::Accepted {
        events: vec![ProjectEvent::ProjectCreatedV1(payload.clone())],
        intents: vec![ProjectIntent::PublishProjectCreated { payload }],
    }
}
