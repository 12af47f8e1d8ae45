use crate::shared::core::status::{EntryStatus, EntryType};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub started_at: Option<i64>,
    pub ended_at: Option<i64>,
    pub duration_minutes: i64,
    pub description: String,
    pub entry_type: EntryType,
    pub status: EntryStatus,
    pub weekly_timesheet_id: String,
    pub approved_by: Option<String>,
    pub approved_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryState {
    None,
    Logged(TimeEntry),
    Deleted,
}
