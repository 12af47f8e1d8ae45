#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectWeek {
    pub weekly_timesheet_id: String,
    pub reason: String,
    pub rejected_at: i64,
}
