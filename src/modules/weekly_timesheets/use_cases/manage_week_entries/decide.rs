use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::events::v1::entry_attached::EntryAttachedV1;
use crate::modules::weekly_timesheets::core::events::v1::entry_detached::EntryDetachedV1;
use crate::modules::weekly_timesheets::core::events::v1::week_opened::WeekOpenedV1;
use crate::modules::weekly_timesheets::core::identity::weekly_timesheet_id;
use crate::modules::weekly_timesheets::core::intents::WeeklyTimesheetIntent;
use crate::modules::weekly_timesheets::core::state::WeeklyTimesheetState;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use crate::shared::core::primitives::week_bounds;
use crate::shared::core::status::WeekStatus;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("weekly timesheet not found")]
    NotFound,
    #[error("cannot add entries to a {0} week")]
    AttachLocked(WeekStatus),
    #[error("cannot remove entries from a {0} week")]
    DetachLocked(WeekStatus),
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::AttachLocked(_) | DecideError::DetachLocked(_) => RejectionKind::Conflict,
        }
    }
}

type WeekDecision = Decision<WeeklyTimesheetEvent, WeeklyTimesheetIntent, DecideError>;

/// Get-or-create: an existing week yields no events.
pub fn decide_open_week(state: &WeeklyTimesheetState, user_id: &str, date: NaiveDate, opened_at: i64) -> WeekDecision {
    if matches!(state, WeeklyTimesheetState::Open(_)) {
        return Decision::accept(Vec::new());
    }
    let (week_start, week_end) = week_bounds(date);
    Decision::accept(vec![WeeklyTimesheetEvent::WeekOpenedV1(WeekOpenedV1 {
        weekly_timesheet_id: weekly_timesheet_id(user_id, week_start),
        user_id: user_id.to_string(),
        week_start,
        week_end,
        opened_at,
    })])
}

pub fn decide_attach_entry(
    state: &WeeklyTimesheetState,
    time_entry_id: &str,
    override_lock: bool,
    attached_at: i64,
) -> WeekDecision {
    let WeeklyTimesheetState::Open(week) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    if week.holds(time_entry_id) {
        return Decision::accept(Vec::new());
    }
    if !override_lock && !week.status.is_editable() {
        return Decision::reject(DecideError::AttachLocked(week.status));
    }
    Decision::accept(vec![WeeklyTimesheetEvent::EntryAttachedV1(EntryAttachedV1 {
        weekly_timesheet_id: week.weekly_timesheet_id.clone(),
        time_entry_id: time_entry_id.to_string(),
        attached_at,
    })])
}

pub fn decide_detach_entry(
    state: &WeeklyTimesheetState,
    time_entry_id: &str,
    override_lock: bool,
    detached_at: i64,
) -> WeekDecision {
    let WeeklyTimesheetState::Open(week) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    if !week.holds(time_entry_id) {
        return Decision::accept(Vec::new());
    }
    if !override_lock && !week.status.is_editable() {
        return Decision::reject(DecideError::DetachLocked(week.status));
    }
    Decision::accept(vec![WeeklyTimesheetEvent::EntryDetachedV1(EntryDetachedV1 {
        weekly_timesheet_id: week.weekly_timesheet_id.clone(),
        time_entry_id: time_entry_id.to_string(),
        detached_at,
    })])
}
