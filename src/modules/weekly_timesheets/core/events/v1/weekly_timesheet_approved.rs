use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyTimesheetApprovedV1 {
    pub weekly_timesheet_id: String,
    pub user_id: String,
    pub entry_ids: Vec<String>,
    pub approved_by: String,
    pub approved_at: i64,
}
