use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitWeek {
    pub week_start: NaiveDate,
    pub notes: String,
    pub submitted_at: i64,
}
