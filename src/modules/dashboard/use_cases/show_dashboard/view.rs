use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::modules::timers::use_cases::timer_status::inbound::http::TimerStatus;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::projection::WeeklyTimesheetRow;
use chrono::NaiveDate;
use serde::Serialize;

pub const RECENT_ENTRIES: usize = 5;

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub running_timer: TimerStatus,
    pub total_hours_week: f64,
    pub recent_entries: Vec<TimeEntryRow>,
    pub pending_approvals_count: usize,
    pub pending_weekly_approvals_count: usize,
    pub active_projects_count: u64,
    /// Only present for workers.
    pub current_week: Option<WeeklyTimesheetRow>,
}
