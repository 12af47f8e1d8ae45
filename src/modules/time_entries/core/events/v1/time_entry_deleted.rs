use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeEntryDeletedV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub weekly_timesheet_id: String,
    pub deleted_at: i64,
    pub deleted_by: String,
}
