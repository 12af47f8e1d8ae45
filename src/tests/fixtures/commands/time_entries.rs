use crate::modules::time_entries::core::ports::WeekSlot;
use crate::modules::time_entries::use_cases::log_time_entry::command::{EntrySpan, LogTimeEntry};
use crate::modules::time_entries::use_cases::revise_time_entry::command::ReviseTimeEntry;
use crate::shared::core::primitives::{DATE_FORMAT, week_bounds};
use crate::shared::core::status::WeekStatus;
use chrono::{NaiveDate, NaiveTime};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn clock_time(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

/// Swaps the wall clock times of a manual span, or turns a timer span into
/// a manual one on its start date.
fn with_times(span: EntrySpan, start: &str, end: &str) -> EntrySpan {
    EntrySpan::Manual {
        date: span.date(),
        start: clock_time(start),
        end: clock_time(end),
    }
}

fn with_date(span: EntrySpan, date: &str) -> EntrySpan {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).unwrap();
    match span {
        EntrySpan::Manual { start, end, .. } => EntrySpan::Manual { date, start, end },
        EntrySpan::Timer { .. } => EntrySpan::Manual {
            date,
            start: clock_time("09:00"),
            end: clock_time("10:00"),
        },
    }
}

pub struct LogTimeEntryBuilder {
    inner: LogTimeEntry,
}

impl Default for LogTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LogTimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: LogTimeEntry {
                time_entry_id: "te-1".to_string(),
                project_id: "p-1".to_string(),
                span: EntrySpan::Manual {
                    date: monday(),
                    start: clock_time("09:00"),
                    end: clock_time("10:00"),
                },
                description: "work".to_string(),
                logged_at: 1_736_157_600_000,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.inner.span = with_times(self.inner.span, start, end);
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.inner.span = with_date(self.inner.span, date);
        self
    }

    pub fn timer(mut self, started_at: i64, stopped_at: i64) -> Self {
        self.inner.span = EntrySpan::Timer {
            started_at,
            stopped_at,
        };
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> LogTimeEntry {
        self.inner
    }
}

pub struct ReviseTimeEntryBuilder {
    inner: ReviseTimeEntry,
}

impl Default for ReviseTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ReviseTimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: ReviseTimeEntry {
                time_entry_id: "te-1".to_string(),
                project_id: "p-1".to_string(),
                span: EntrySpan::Manual {
                    date: monday(),
                    start: clock_time("09:00"),
                    end: clock_time("11:00"),
                },
                description: "Revised".to_string(),
                revised_at: 1_736_164_800_000,
            },
        }
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.inner.span = with_times(self.inner.span, start, end);
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.inner.span = with_date(self.inner.span, date);
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> ReviseTimeEntry {
        self.inner
    }
}

/// `wk-1`, the week of 2025-01-06.
pub fn week_slot(status: WeekStatus) -> WeekSlot {
    week_slot_for("wk-1", "2025-01-06", status)
}

pub fn week_slot_for(weekly_timesheet_id: &str, week_start: &str, status: WeekStatus) -> WeekSlot {
    let (week_start, week_end) = week_bounds(NaiveDate::parse_from_str(week_start, DATE_FORMAT).unwrap());
    WeekSlot {
        weekly_timesheet_id: weekly_timesheet_id.to_string(),
        week_start,
        week_end,
        status,
    }
}
