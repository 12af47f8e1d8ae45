use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::projection::WeeklyTimesheetRow;
use crate::shared::core::status::WeekStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Insert(WeeklyTimesheetRow),
    AddEntry {
        weekly_timesheet_id: String,
        time_entry_id: String,
        updated_at: i64,
    },
    RemoveEntry {
        weekly_timesheet_id: String,
        time_entry_id: String,
        updated_at: i64,
    },
    Submit {
        weekly_timesheet_id: String,
        notes: String,
        submitted_at: i64,
    },
    Review {
        weekly_timesheet_id: String,
        status: WeekStatus,
        reviewed_by: String,
        reviewed_at: i64,
        rejection_reason: Option<String>,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &WeeklyTimesheetEvent) -> Vec<Mutation> {
    match event {
        WeeklyTimesheetEvent::WeekOpenedV1(e) => vec![Mutation::Insert(WeeklyTimesheetRow {
            weekly_timesheet_id: e.weekly_timesheet_id.clone(),
            user_id: e.user_id.clone(),
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
            last_event_id: Some(format!("{stream_id}:{version}")),
        })],
        WeeklyTimesheetEvent::EntryAttachedV1(e) => vec![Mutation::AddEntry {
            weekly_timesheet_id: e.weekly_timesheet_id.clone(),
            time_entry_id: e.time_entry_id.clone(),
            updated_at: e.attached_at,
        }],
        WeeklyTimesheetEvent::EntryDetachedV1(e) => vec![Mutation::RemoveEntry {
            weekly_timesheet_id: e.weekly_timesheet_id.clone(),
            time_entry_id: e.time_entry_id.clone(),
            updated_at: e.detached_at,
        }],
        WeeklyTimesheetEvent::WeeklyTimesheetSubmittedV1(e) => vec![Mutation::Submit {
            weekly_timesheet_id: e.weekly_timesheet_id.clone(),
            notes: e.notes.clone(),
            submitted_at: e.submitted_at,
        }],
        WeeklyTimesheetEvent::WeeklyTimesheetApprovedV1(e) => vec![Mutation::Review {
            weekly_timesheet_id: e.weekly_timesheet_id.clone(),
            status: WeekStatus::Approved,
            reviewed_by: e.approved_by.clone(),
            reviewed_at: e.approved_at,
            rejection_reason: None,
        }],
        WeeklyTimesheetEvent::WeeklyTimesheetRejectedV1(e) => vec![Mutation::Review {
            weekly_timesheet_id: e.weekly_timesheet_id.clone(),
            status: WeekStatus::Rejected,
            reviewed_by: e.rejected_by.clone(),
            reviewed_at: e.rejected_at,
            rejection_reason: Some(e.reason.clone()),
        }],
    }
}
