use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_reviewed::TimeEntryReviewedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::weekly_timesheets::core::ports::WeekStatusChange;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use crate::shared::core::status::{EntryStatus, WeekStatus};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entry not found")]
    NotFound,
    #[error("a {0} week has no entry status")]
    NothingToMirror(WeekStatus),
    #[error("entry already reflects its week")]
    Unchanged,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::NothingToMirror(_) | DecideError::Unchanged => RejectionKind::Conflict,
        }
    }
}

/// Submitted weeks put their entries back to pending and clear any previous
/// review; approved and rejected weeks stamp the reviewer onto each entry.
pub fn decide_mirror_week_status(
    state: &TimeEntryState,
    change: &WeekStatusChange,
) -> Decision<TimeEntryEvent, TimeEntryIntent, DecideError> {
    let TimeEntryState::Logged(entry) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    let Some(status) = change.status.mirrored_entry_status() else {
        return Decision::reject(DecideError::NothingToMirror(change.status));
    };
    let reviewed = status != EntryStatus::Pending;
    let event = TimeEntryReviewedV1 {
        time_entry_id: entry.time_entry_id.clone(),
        status,
        reviewed_by: reviewed.then(|| change.changed_by.clone()),
        reviewed_at: reviewed.then_some(change.changed_at),
        rejection_reason: if status == EntryStatus::Rejected {
            change.rejection_reason.clone()
        } else {
            None
        },
        via_weekly_timesheet: Some(change.weekly_timesheet_id.clone()),
        recorded_at: change.changed_at,
    };
    if entry.status == event.status
        && entry.approved_by == event.reviewed_by
        && entry.rejection_reason == event.rejection_reason
    {
        return Decision::reject(DecideError::Unchanged);
    }
    Decision::accept(vec![TimeEntryEvent::TimeEntryReviewedV1(event)])
}
