use chrono::NaiveDate;
use uuid::Uuid;

/// One timesheet per user and Monday: the id is derived from the pair, so the
/// stream identity is the uniqueness constraint.
pub fn weekly_timesheet_id(user_id: &str, week_start: NaiveDate) -> String {
    let name = format!("{user_id}:{}", week_start.format("%Y-%m-%d"));
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string()
}

pub fn weekly_timesheet_stream_id(weekly_timesheet_id: &str) -> String {
    format!("WeeklyTimesheet-{weekly_timesheet_id}")
}
