use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekOpenedV1 {
    pub weekly_timesheet_id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub opened_at: i64,
}
