use crate::modules::time_entries::core::events::v1::time_entry_logged::TimeEntryLoggedV1;
use crate::shared::core::primitives::millis_of;
use crate::shared::core::status::EntryType;
use chrono::{NaiveDate, NaiveTime};

/// A 90 minute manual entry on Monday 2025-01-06, filed in week `wk-1`.
pub fn make_time_entry_logged_v1_event(time_entry_id: &str, user_id: &str) -> TimeEntryLoggedV1 {
    let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let started_at = millis_of(date, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    let ended_at = millis_of(date, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    TimeEntryLoggedV1 {
        time_entry_id: time_entry_id.to_string(),
        user_id: user_id.to_string(),
        project_id: "p-1".to_string(),
        date,
        started_at: Some(started_at),
        ended_at: Some(ended_at),
        duration_minutes: 90,
        description: "Design review".to_string(),
        entry_type: EntryType::Manual,
        weekly_timesheet_id: "wk-1".to_string(),
        logged_at: ended_at,
        logged_by: user_id.to_string(),
    }
}
