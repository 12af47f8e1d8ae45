use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::projection::WeeklyTimesheetRow;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait WeeklyTimesheetQueries: Send + Sync {
    async fn get(&self, weekly_timesheet_id: &str) -> anyhow::Result<Option<WeeklyTimesheetRow>>;
    async fn find(&self, user_id: &str, week_start: NaiveDate) -> anyhow::Result<Option<WeeklyTimesheetRow>>;
    /// Submitted weeks, most recently submitted first.
    async fn list_submitted(&self) -> anyhow::Result<Vec<WeeklyTimesheetRow>>;
}
