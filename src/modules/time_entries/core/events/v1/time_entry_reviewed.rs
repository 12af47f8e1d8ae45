use crate::shared::core::status::EntryStatus;
use serde::{Deserialize, Serialize};

/// Status change of one entry, either reviewed on its own or mirrored from
/// its weekly timesheet (`via_weekly_timesheet`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeEntryReviewedV1 {
    pub time_entry_id: String,
    pub status: EntryStatus,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub via_weekly_timesheet: Option<String>,
    pub recorded_at: i64,
}
