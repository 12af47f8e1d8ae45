use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::state::{WeeklyTimesheet, WeeklyTimesheetState};
use crate::shared::core::status::WeekStatus;

pub fn evolve(state: WeeklyTimesheetState, event: WeeklyTimesheetEvent) -> WeeklyTimesheetState {
    match (state, event) {
        (WeeklyTimesheetState::None, WeeklyTimesheetEvent::WeekOpenedV1(e)) => {
            WeeklyTimesheetState::Open(WeeklyTimesheet {
                weekly_timesheet_id: e.weekly_timesheet_id,
                user_id: e.user_id,
                week_start: e.week_start,
                week_end: e.week_end,
                status: WeekStatus::Draft,
                entry_ids: Vec::new(),
                notes: String::new(),
                submitted_at: None,
                approved_by: None,
                approved_at: None,
                rejection_reason: None,
                opened_at: e.opened_at,
                updated_at: e.opened_at,
            })
        }
        (WeeklyTimesheetState::Open(mut week), WeeklyTimesheetEvent::EntryAttachedV1(e)) => {
            if !week.holds(&e.time_entry_id) {
                week.entry_ids.push(e.time_entry_id);
            }
            week.updated_at = e.attached_at;
            WeeklyTimesheetState::Open(week)
        }
        (WeeklyTimesheetState::Open(mut week), WeeklyTimesheetEvent::EntryDetachedV1(e)) => {
            week.entry_ids.retain(|id| *id != e.time_entry_id);
            week.updated_at = e.detached_at;
            WeeklyTimesheetState::Open(week)
        }
        (WeeklyTimesheetState::Open(week), WeeklyTimesheetEvent::WeeklyTimesheetSubmittedV1(e)) => {
            WeeklyTimesheetState::Open(WeeklyTimesheet {
                status: WeekStatus::Submitted,
                notes: e.notes,
                submitted_at: Some(e.submitted_at),
                approved_by: None,
                approved_at: None,
                rejection_reason: None,
                updated_at: e.submitted_at,
                ..week
            })
        }
        (WeeklyTimesheetState::Open(week), WeeklyTimesheetEvent::WeeklyTimesheetApprovedV1(e)) => {
            WeeklyTimesheetState::Open(WeeklyTimesheet {
                status: WeekStatus::Approved,
                approved_by: Some(e.approved_by),
                approved_at: Some(e.approved_at),
                updated_at: e.approved_at,
                ..week
            })
        }
        (WeeklyTimesheetState::Open(week), WeeklyTimesheetEvent::WeeklyTimesheetRejectedV1(e)) => {
            WeeklyTimesheetState::Open(WeeklyTimesheet {
                status: WeekStatus::Rejected,
                approved_by: Some(e.rejected_by),
                approved_at: Some(e.rejected_at),
                rejection_reason: Some(e.reason),
                updated_at: e.rejected_at,
                ..week
            })
        }
        (state, _) => state,
    }
}
