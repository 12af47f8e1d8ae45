use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::events::v1::entry_attached::EntryAttachedV1;
use crate::modules::weekly_timesheets::core::events::v1::week_opened::WeekOpenedV1;
use crate::modules::weekly_timesheets::core::events::v1::weekly_timesheet_submitted::WeeklyTimesheetSubmittedV1;
use crate::modules::weekly_timesheets::core::state::{WeeklyTimesheet, WeeklyTimesheetState};
use crate::shared::core::status::WeekStatus;
use crate::tests::fixtures::actors::worker;
use chrono::NaiveDate;

const OPENED_AT: i64 = 1_736_150_400_000;
const SUBMITTED_AT: i64 = 1_736_726_400_000;

fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn week_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()
}

pub fn make_week_opened_v1_event(weekly_timesheet_id: &str, user_id: &str) -> WeekOpenedV1 {
    WeekOpenedV1 {
        weekly_timesheet_id: weekly_timesheet_id.to_string(),
        user_id: user_id.to_string(),
        week_start: week_start(),
        week_end: week_end(),
        opened_at: OPENED_AT,
    }
}

/// The worker's week of 2025-01-06 as `wk-1`, already in `status`.
pub fn week_in_status(status: WeekStatus, entry_ids: &[&str]) -> WeeklyTimesheetState {
    let submitted = status != WeekStatus::Draft;
    WeeklyTimesheetState::Open(WeeklyTimesheet {
        weekly_timesheet_id: "wk-1".to_string(),
        user_id: worker().user_id,
        week_start: week_start(),
        week_end: week_end(),
        status,
        entry_ids: entry_ids.iter().map(|id| id.to_string()).collect(),
        notes: String::new(),
        submitted_at: submitted.then_some(SUBMITTED_AT),
        approved_by: None,
        approved_at: None,
        rejection_reason: (status == WeekStatus::Rejected).then(|| "missing hours".to_string()),
        opened_at: OPENED_AT,
        updated_at: if submitted { SUBMITTED_AT } else { OPENED_AT },
    })
}

/// Event history of the worker's `wk-1` submitted with the given entries.
pub fn submitted_week_events(entry_ids: &[&str]) -> Vec<WeeklyTimesheetEvent> {
    let mut events = vec![WeeklyTimesheetEvent::WeekOpenedV1(make_week_opened_v1_event(
        "wk-1",
        &worker().user_id,
    ))];
    events.extend(entry_ids.iter().map(|id| {
        WeeklyTimesheetEvent::EntryAttachedV1(EntryAttachedV1 {
            weekly_timesheet_id: "wk-1".to_string(),
            time_entry_id: id.to_string(),
            attached_at: OPENED_AT,
        })
    }));
    events.push(WeeklyTimesheetEvent::WeeklyTimesheetSubmittedV1(WeeklyTimesheetSubmittedV1 {
        weekly_timesheet_id: "wk-1".to_string(),
        user_id: worker().user_id,
        week_start: week_start(),
        entry_ids: entry_ids.iter().map(|id| id.to_string()).collect(),
        notes: String::new(),
        submitted_at: SUBMITTED_AT,
    }));
    events
}
