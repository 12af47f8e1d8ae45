use crate::shared::core::status::EntryType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeEntryLoggedV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub started_at: Option<i64>,
    pub ended_at: Option<i64>,
    pub duration_minutes: i64,
    pub description: String,
    pub entry_type: EntryType,
    pub weekly_timesheet_id: String,
    pub logged_at: i64,
    pub logged_by: String,
}
