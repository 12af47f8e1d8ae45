// Read model rows for query and view tests.

use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::modules::users::use_cases::list_users::projection::UserRow;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::projection::WeeklyTimesheetRow;
use crate::shared::core::actor::Role;
use crate::shared::core::primitives::{DATE_FORMAT, week_bounds};
use crate::shared::core::status::{EntryStatus, EntryType, WeekStatus};
use chrono::NaiveDate;

pub fn user_row(user_id: &str, username: &str, role: Role) -> UserRow {
    UserRow {
        user_id: user_id.to_string(),
        username: username.to_string(),
        email: format!("{username}@example.org"),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        role,
        department: "Engineering".to_string(),
        is_active: true,
        registered_at: 1,
        updated_at: 1,
        last_event_id: Some(format!("User-{user_id}:1")),
    }
}

/// A pending, one hour manual entry on `date`.
pub fn time_entry_row(time_entry_id: &str, user_id: &str, project_id: &str, date: &str) -> TimeEntryRow {
    TimeEntryRow {
        time_entry_id: time_entry_id.to_string(),
        user_id: user_id.to_string(),
        project_id: project_id.to_string(),
        date: NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap(),
        started_at: None,
        ended_at: None,
        duration_minutes: 60,
        duration_hours: 1.0,
        description: "work".to_string(),
        entry_type: EntryType::Manual,
        status: EntryStatus::Pending,
        weekly_timesheet_id: "wk-1".to_string(),
        approved_by: None,
        approved_at: None,
        rejection_reason: None,
        created_at: 1,
        updated_at: 1,
        last_event_id: Some(format!("TimeEntry-{time_entry_id}:1")),
    }
}

/// The week of 2025-01-06 in `status`.
pub fn weekly_timesheet_row(weekly_timesheet_id: &str, status: WeekStatus, entry_ids: &[&str]) -> WeeklyTimesheetRow {
    let (week_start, week_end) = week_bounds(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    WeeklyTimesheetRow {
        weekly_timesheet_id: weekly_timesheet_id.to_string(),
        user_id: "u-1".to_string(),
        week_start,
        week_end,
        status,
        entry_ids: entry_ids.iter().map(|id| id.to_string()).collect(),
        notes: String::new(),
        submitted_at: None,
        approved_by: None,
        approved_at: None,
        rejection_reason: None,
        opened_at: 1,
        updated_at: 1,
        last_event_id: Some(format!("WeeklyTimesheet-{weekly_timesheet_id}:1")),
    }
}
