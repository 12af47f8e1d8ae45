// Calendar and duration helpers shared by every module.
//
// Weeks run Monday through Sunday. All instants are epoch milliseconds in UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let week_start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (week_start, week_start + Duration::days(6))
}

/// Parses a `YYYY-MM-DD` path segment that names the Monday of a week.
pub fn parse_week_start(raw: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| format!("'{raw}' is not a date in YYYY-MM-DD format"))?;
    if date.weekday() != Weekday::Mon {
        return Err(format!("{raw} is not a Monday"));
    }
    Ok(date)
}

pub fn minutes_to_hours(minutes: i64) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

/// Formats elapsed minutes as `HH:MM`.
pub fn elapsed_label(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

pub fn datetime_of_millis(millis: i64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .naive_utc()
}

pub fn date_of_millis(millis: i64) -> NaiveDate {
    datetime_of_millis(millis).date()
}

pub fn millis_of(date: NaiveDate, time: NaiveTime) -> i64 {
    date.and_time(time).and_utc().timestamp_millis()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Slices `items` into a page. Out of range page numbers clamp to the
/// nearest valid page, and an empty list still has one (empty) page.
pub fn paginate<T>(items: Vec<T>, page: Option<u64>, per_page: u64) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len() as u64;
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.unwrap_or(1).clamp(1, total_pages);
    let start = ((page - 1) * per_page) as usize;
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();
    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
    }
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
