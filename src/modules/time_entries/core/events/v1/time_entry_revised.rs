use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeEntryRevisedV1 {
    pub time_entry_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub started_at: Option<i64>,
    pub ended_at: Option<i64>,
    pub duration_minutes: i64,
    pub description: String,
    pub weekly_timesheet_id: String,
    pub revised_at: i64,
    pub revised_by: String,
}
