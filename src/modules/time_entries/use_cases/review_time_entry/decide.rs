use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_reviewed::TimeEntryReviewedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::review_time_entry::command::{ReviewTimeEntry, Verdict};
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use crate::shared::core::status::EntryStatus;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only managers can review time entries")]
    NotManager,
    #[error("time entry not found")]
    NotFound,
    #[error("this entry has already been processed")]
    AlreadyProcessed,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotManager => RejectionKind::Forbidden,
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::AlreadyProcessed => RejectionKind::Conflict,
        }
    }
}

pub fn decide_review_time_entry(
    state: &TimeEntryState,
    actor: &Actor,
    command: ReviewTimeEntry,
) -> Decision<TimeEntryEvent, TimeEntryIntent, DecideError> {
    if !actor.is_manager_or_admin() {
        return Decision::reject(DecideError::NotManager);
    }
    let TimeEntryState::Logged(entry) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    if entry.status != EntryStatus::Pending {
        return Decision::reject(DecideError::AlreadyProcessed);
    }

    let (status, rejection_reason) = match command.verdict {
        Verdict::Approve => (EntryStatus::Approved, None),
        Verdict::Reject { reason } => (
            EntryStatus::Rejected,
            reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty()),
        ),
    };
    let reviewed = TimeEntryReviewedV1 {
        time_entry_id: command.time_entry_id,
        status,
        reviewed_by: Some(actor.user_id.clone()),
        reviewed_at: Some(command.reviewed_at),
        rejection_reason,
        via_weekly_timesheet: None,
        recorded_at: command.reviewed_at,
    };
    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntryReviewedV1(reviewed.clone())],
        intents: vec![TimeEntryIntent::PublishTimeEntryReviewed { payload: reviewed }],
    }
}
