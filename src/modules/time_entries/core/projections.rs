use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::shared::core::primitives::minutes_to_hours;
use crate::shared::core::status::EntryStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Insert(TimeEntryRow),
    Revise {
        time_entry_id: String,
        project_id: String,
        date: NaiveDate,
        started_at: Option<i64>,
        ended_at: Option<i64>,
        duration_minutes: i64,
        description: String,
        weekly_timesheet_id: String,
        updated_at: i64,
    },
    SetStatus {
        time_entry_id: String,
        status: EntryStatus,
        approved_by: Option<String>,
        approved_at: Option<i64>,
        rejection_reason: Option<String>,
        updated_at: i64,
    },
    Remove {
        time_entry_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &TimeEntryEvent) -> Vec<Mutation> {
    match event {
        TimeEntryEvent::TimeEntryLoggedV1(e) => vec![Mutation::Insert(TimeEntryRow {
            time_entry_id: e.time_entry_id.clone(),
            user_id: e.user_id.clone(),
            project_id: e.project_id.clone(),
            date: e.date,
            started_at: e.started_at,
            ended_at: e.ended_at,
            duration_minutes: e.duration_minutes,
            duration_hours: minutes_to_hours(e.duration_minutes),
            description: e.description.clone(),
            entry_type: e.entry_type,
            status: EntryStatus::Pending,
            weekly_timesheet_id: e.weekly_timesheet_id.clone(),
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
            created_at: e.logged_at,
            updated_at: e.logged_at,
            last_event_id: Some(format!("{stream_id}:{version}")),
        })],
        TimeEntryEvent::TimeEntryRevisedV1(e) => vec![Mutation::Revise {
            time_entry_id: e.time_entry_id.clone(),
            project_id: e.project_id.clone(),
            date: e.date,
            started_at: e.started_at,
            ended_at: e.ended_at,
            duration_minutes: e.duration_minutes,
            description: e.description.clone(),
            weekly_timesheet_id: e.weekly_timesheet_id.clone(),
            updated_at: e.revised_at,
        }],
        TimeEntryEvent::TimeEntryReviewedV1(e) => vec![Mutation::SetStatus {
            time_entry_id: e.time_entry_id.clone(),
            status: e.status,
            approved_by: e.reviewed_by.clone(),
            approved_at: e.reviewed_at,
            rejection_reason: e.rejection_reason.clone(),
            updated_at: e.recorded_at,
        }],
        TimeEntryEvent::TimeEntryDeletedV1(e) => vec![Mutation::Remove {
            time_entry_id: e.time_entry_id.clone(),
        }],
    }
}
