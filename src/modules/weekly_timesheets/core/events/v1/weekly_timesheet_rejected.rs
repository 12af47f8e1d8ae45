use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyTimesheetRejectedV1 {
    pub weekly_timesheet_id: String,
    pub user_id: String,
    pub entry_ids: Vec<String>,
    pub rejected_by: String,
    pub rejected_at: i64,
    pub reason: String,
}
