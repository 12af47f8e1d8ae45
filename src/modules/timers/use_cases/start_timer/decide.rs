use crate::modules::time_entries::core::ports::ProjectAvailability;
use crate::modules::timers::core::events::TimerEvent;
use crate::modules::timers::core::events::v1::timer_started::TimerStartedV1;
use crate::modules::timers::core::intents::TimerIntent;
use crate::modules::timers::core::state::TimerState;
use crate::modules::timers::use_cases::start_timer::command::StartTimer;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("you already have a running timer, stop it first")]
    AlreadyRunning,
    #[error("project not found")]
    ProjectNotFound,
    #[error("project is not active")]
    ProjectInactive,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::AlreadyRunning => RejectionKind::Conflict,
            DecideError::ProjectNotFound => RejectionKind::NotFound,
            DecideError::ProjectInactive => RejectionKind::Invalid,
        }
    }
}

pub fn decide_start_timer(
    state: &TimerState,
    actor: &Actor,
    command: StartTimer,
    project: ProjectAvailability,
) -> Decision<TimerEvent, TimerIntent, DecideError> {
    if matches!(state, TimerState::Running(_)) {
        return Decision::reject(DecideError::AlreadyRunning);
    }
    match project {
        ProjectAvailability::Missing => Decision::reject(DecideError::ProjectNotFound),
        ProjectAvailability::Inactive => Decision::reject(DecideError::ProjectInactive),
        ProjectAvailability::Active => Decision::accept(vec![TimerEvent::TimerStartedV1(TimerStartedV1 {
            timer_id: command.timer_id,
            user_id: actor.user_id.clone(),
            project_id: command.project_id,
            description: command.description.trim().to_string(),
            started_at: command.started_at,
        })]),
    }
}
