use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::{TimeEntry, TimeEntryState};
use crate::shared::core::status::EntryStatus;

pub fn evolve(state: TimeEntryState, event: TimeEntryEvent) -> TimeEntryState {
    match (state, event) {
        (TimeEntryState::None, TimeEntryEvent::TimeEntryLoggedV1(e)) => {
            TimeEntryState::Logged(TimeEntry {
                time_entry_id: e.time_entry_id,
                user_id: e.user_id,
                project_id: e.project_id,
                date: e.date,
                started_at: e.started_at,
                ended_at: e.ended_at,
                duration_minutes: e.duration_minutes,
                description: e.description,
                entry_type: e.entry_type,
                status: EntryStatus::Pending,
                weekly_timesheet_id: e.weekly_timesheet_id,
                approved_by: None,
                approved_at: None,
                rejection_reason: None,
                created_at: e.logged_at,
                updated_at: e.logged_at,
            })
        }
        (TimeEntryState::Logged(entry), TimeEntryEvent::TimeEntryRevisedV1(e)) => {
            TimeEntryState::Logged(TimeEntry {
                project_id: e.project_id,
                date: e.date,
                started_at: e.started_at,
                ended_at: e.ended_at,
                duration_minutes: e.duration_minutes,
                description: e.description,
                weekly_timesheet_id: e.weekly_timesheet_id,
                updated_at: e.revised_at,
                ..entry
            })
        }
        (TimeEntryState::Logged(entry), TimeEntryEvent::TimeEntryReviewedV1(e)) => {
            TimeEntryState::Logged(TimeEntry {
                status: e.status,
                approved_by: e.reviewed_by,
                approved_at: e.reviewed_at,
                rejection_reason: e.rejection_reason,
                updated_at: e.recorded_at,
                ..entry
            })
        }
        (TimeEntryState::Logged(_), TimeEntryEvent::TimeEntryDeletedV1(_)) => {
            TimeEntryState::Deleted
        }
        (state, _) => state,
    }
}
