use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryDetachedV1 {
    pub weekly_timesheet_id: String,
    pub time_entry_id: String,
    pub detached_at: i64,
}
