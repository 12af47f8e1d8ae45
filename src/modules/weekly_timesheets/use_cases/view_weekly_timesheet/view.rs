use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::projection::WeeklyTimesheetRow;
use crate::shared::core::primitives::minutes_to_hours;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTimesheetSummary {
    #[serde(flatten)]
    pub timesheet: WeeklyTimesheetRow,
    pub entry_count: usize,
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub hours: f64,
    pub entries: Vec<TimeEntryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTimesheetView {
    pub timesheet: WeeklyTimesheetSummary,
    pub days: Vec<DaySummary>,
    pub entries: Vec<TimeEntryRow>,
    pub can_submit: bool,
}

pub fn summarize(timesheet: WeeklyTimesheetRow, entries: &[TimeEntryRow]) -> WeeklyTimesheetSummary {
    let minutes: i64 = entries.iter().map(|entry| entry.duration_minutes).sum();
    WeeklyTimesheetSummary {
        entry_count: timesheet.entry_ids.len(),
        total_hours: minutes_to_hours(minutes),
        timesheet,
    }
}

/// Entries run by date, newest created first within a day. Only days with
/// entries are listed.
pub fn assemble(timesheet: WeeklyTimesheetRow, mut entries: Vec<TimeEntryRow>) -> WeeklyTimesheetView {
    entries.sort_by_key(|entry| (entry.date, Reverse(entry.created_at)));

    let mut by_day: BTreeMap<NaiveDate, Vec<TimeEntryRow>> = BTreeMap::new();
    for entry in &entries {
        by_day.entry(entry.date).or_default().push(entry.clone());
    }
    let days = by_day
        .into_iter()
        .map(|(date, entries)| DaySummary {
            date,
            hours: minutes_to_hours(entries.iter().map(|entry| entry.duration_minutes).sum()),
            entries,
        })
        .collect();

    let can_submit = timesheet.can_submit();
    WeeklyTimesheetView {
        timesheet: summarize(timesheet, &entries),
        days,
        entries,
        can_submit,
    }
}
