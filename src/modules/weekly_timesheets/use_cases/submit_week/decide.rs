use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::events::v1::weekly_timesheet_submitted::WeeklyTimesheetSubmittedV1;
use crate::modules::weekly_timesheets::core::intents::WeeklyTimesheetIntent;
use crate::modules::weekly_timesheets::core::state::WeeklyTimesheetState;
use crate::modules::weekly_timesheets::use_cases::submit_week::command::SubmitWeek;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use crate::shared::core::primitives::date_of_millis;
use crate::shared::core::status::WeekStatus;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("weekly timesheet not found")]
    NotFound,
    #[error("you can only submit your own weeks")]
    NotOwner,
    #[error("cannot submit a {0} week")]
    NotSubmittable(WeekStatus),
    #[error("cannot submit an empty week, add at least one time entry")]
    Empty,
    #[error("you can only submit a week after it has ended")]
    NotEnded,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::NotOwner => RejectionKind::Forbidden,
            DecideError::NotSubmittable(_) | DecideError::Empty | DecideError::NotEnded => {
                RejectionKind::Conflict
            }
        }
    }
}

/// A week can be submitted from draft or rejected, once it holds entries and
/// its Sunday has passed.
pub fn decide_submit_week(
    state: &WeeklyTimesheetState,
    actor: &Actor,
    command: SubmitWeek,
) -> Decision<WeeklyTimesheetEvent, WeeklyTimesheetIntent, DecideError> {
    let WeeklyTimesheetState::Open(week) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    if !actor.owns(&week.user_id) {
        return Decision::reject(DecideError::NotOwner);
    }
    if !week.status.is_editable() {
        return Decision::reject(DecideError::NotSubmittable(week.status));
    }
    if week.entry_ids.is_empty() {
        return Decision::reject(DecideError::Empty);
    }
    if date_of_millis(command.submitted_at) <= week.week_end {
        return Decision::reject(DecideError::NotEnded);
    }

    let submitted = WeeklyTimesheetSubmittedV1 {
        weekly_timesheet_id: week.weekly_timesheet_id.clone(),
        user_id: week.user_id.clone(),
        week_start: week.week_start,
        entry_ids: week.entry_ids.clone(),
        notes: command.notes.trim().to_string(),
        submitted_at: command.submitted_at,
    };
    Decision::Accepted {
        events: vec![WeeklyTimesheetEvent::WeeklyTimesheetSubmittedV1(submitted.clone())],
        intents: vec![WeeklyTimesheetIntent::PublishWeekSubmitted { payload: submitted }],
    }
}
