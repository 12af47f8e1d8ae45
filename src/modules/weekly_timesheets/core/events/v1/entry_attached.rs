use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryAttachedV1 {
    pub weekly_timesheet_id: String,
    pub time_entry_id: String,
    pub attached_at: i64,
}
