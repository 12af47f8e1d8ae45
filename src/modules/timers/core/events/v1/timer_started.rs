use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerStartedV1 {
    pub timer_id: String,
    pub user_id: String,
    pub project_id: String,
    pub description: String,
    pub started_at: i64,
}
