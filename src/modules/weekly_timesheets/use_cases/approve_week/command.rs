#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveWeek {
    pub weekly_timesheet_id: String,
    pub approved_at: i64,
}
