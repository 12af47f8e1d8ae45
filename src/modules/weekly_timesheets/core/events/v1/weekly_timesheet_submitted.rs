use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyTimesheetSubmittedV1 {
    pub weekly_timesheet_id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub entry_ids: Vec<String>,
    pub notes: String,
    pub submitted_at: i64,
}
