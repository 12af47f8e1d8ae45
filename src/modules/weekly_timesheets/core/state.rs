use crate::shared::core::status::WeekStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyTimesheet {
    pub weekly_timesheet_id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub status: WeekStatus,
    /// In attach order.
    pub entry_ids: Vec<String>,
    pub notes: String,
    pub submitted_at: Option<i64>,
    pub approved_by: Option<String>,
    pub approved_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub opened_at: i64,
    pub updated_at: i64,
}

impl WeeklyTimesheet {
    pub fn holds(&self, time_entry_id: &str) -> bool {
        self.entry_ids.iter().any(|id| id == time_entry_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeeklyTimesheetState {
    None,
    Open(WeeklyTimesheet),
}
