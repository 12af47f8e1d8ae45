use serde::{Deserialize, Serialize};

/// `time_entry_id` is empty when the entry was discarded; the reason says why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerStoppedV1 {
    pub timer_id: String,
    pub user_id: String,
    pub stopped_at: i64,
    pub time_entry_id: Option<String>,
    pub discarded_reason: Option<String>,
}
