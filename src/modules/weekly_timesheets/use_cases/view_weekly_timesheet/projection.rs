use crate::shared::core::status::WeekStatus;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyTimesheetRow {
    pub weekly_timesheet_id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub status: WeekStatus,
    pub entry_ids: Vec<String>,
    pub notes: String,
    pub submitted_at: Option<i64>,
    pub approved_by: Option<String>,
    pub approved_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub opened_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing)]
    pub last_event_id: Option<String>,
}

impl WeeklyTimesheetRow {
    pub fn can_submit(&self) -> bool {
        self.status.is_editable() && !self.entry_ids.is_empty()
    }
}
