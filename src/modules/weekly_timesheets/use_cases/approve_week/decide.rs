use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::events::v1::weekly_timesheet_approved::WeeklyTimesheetApprovedV1;
use crate::modules::weekly_timesheets::core::intents::WeeklyTimesheetIntent;
use crate::modules::weekly_timesheets::core::state::{WeeklyTimesheet, WeeklyTimesheetState};
use crate::modules::weekly_timesheets::use_cases::approve_week::command::ApproveWeek;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use crate::shared::core::status::WeekStatus;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only managers can review weekly timesheets")]
    NotManager,
    #[error("weekly timesheet not found")]
    NotFound,
    #[error("this weekly timesheet has already been processed")]
    AlreadyProcessed,
    #[error("a rejection reason is required")]
    ReasonRequired,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotManager => RejectionKind::Forbidden,
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::AlreadyProcessed => RejectionKind::Conflict,
            DecideError::ReasonRequired => RejectionKind::Invalid,
        }
    }
}

/// Approving and rejecting both need a manager and a submitted week.
pub fn guard_review<'a>(state: &'a WeeklyTimesheetState, actor: &Actor) -> Result<&'a WeeklyTimesheet, DecideError> {
    if !actor.is_manager_or_admin() {
        return Err(DecideError::NotManager);
    }
    let WeeklyTimesheetState::Open(week) = state else {
        return Err(DecideError::NotFound);
    };
    if week.status != WeekStatus::Submitted {
        return Err(DecideError::AlreadyProcessed);
    }
    Ok(week)
}

pub fn decide_approve_week(
    state: &WeeklyTimesheetState,
    actor: &Actor,
    command: ApproveWeek,
) -> Decision<WeeklyTimesheetEvent, WeeklyTimesheetIntent, DecideError> {
    let week = match guard_review(state, actor) {
        Ok(week) => week,
        Err(reason) => return Decision::reject(reason),
    };
    let approved = WeeklyTimesheetApprovedV1 {
        weekly_timesheet_id: command.weekly_timesheet_id,
        user_id: week.user_id.clone(),
        entry_ids: week.entry_ids.clone(),
        approved_by: actor.user_id.clone(),
        approved_at: command.approved_at,
    };
    Decision::Accepted {
        events: vec![WeeklyTimesheetEvent::WeeklyTimesheetApprovedV1(approved.clone())],
        intents: vec![WeeklyTimesheetIntent::PublishWeekApproved { payload: approved }],
    }
}
