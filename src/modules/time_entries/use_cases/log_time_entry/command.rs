use crate::shared::core::primitives::{date_of_millis, millis_of};
use crate::shared::core::status::EntryType;
use chrono::{NaiveDate, NaiveTime};

/// When the work happened: typed in by hand, or measured by a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySpan {
    Manual {
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    },
    Timer {
        started_at: i64,
        stopped_at: i64,
    },
}

impl EntrySpan {
    pub fn date(&self) -> NaiveDate {
        match self {
            EntrySpan::Manual { date, .. } => *date,
            EntrySpan::Timer { started_at, .. } => date_of_millis(*started_at),
        }
    }

    pub fn entry_type(&self) -> EntryType {
        match self {
            EntrySpan::Manual { .. } => EntryType::Manual,
            EntrySpan::Timer { .. } => EntryType::Timer,
        }
    }

    pub fn bounds(&self) -> (i64, i64) {
        match self {
            EntrySpan::Manual { date, start, end } => (millis_of(*date, *start), millis_of(*date, *end)),
            EntrySpan::Timer {
                started_at,
                stopped_at,
            } => (*started_at, *stopped_at),
        }
    }

    /// Whole minutes covered. Manual spans must end after they start; timer
    /// spans always count at least one minute.
    pub fn duration_minutes(&self) -> Option<i64> {
        let (from, to) = self.bounds();
        let minutes = (to - from).div_euclid(60_000);
        match self {
            EntrySpan::Manual { start, end, .. } => (end > start).then_some(minutes),
            EntrySpan::Timer { .. } => Some(minutes.max(1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTimeEntry {
    pub time_entry_id: String,
    pub project_id: String,
    pub span: EntrySpan,
    pub description: String,
    pub logged_at: i64,
}
