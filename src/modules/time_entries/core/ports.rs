use crate::shared::core::errors::ApplicationError;
use crate::shared::core::status::WeekStatus;
use async_trait::async_trait;
use chrono::NaiveDate;

/// The weekly timesheet an entry belongs to, as seen when it was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSlot {
    pub weekly_timesheet_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub status: WeekStatus,
}

/// Keeps the entry membership of weekly timesheets. Attach and detach honour
/// the week lock unless `override_lock` is set, and repeating either is a no-op.
#[async_trait]
pub trait WeekLedger: Send + Sync {
    async fn open_week_for(&self, user_id: &str, date: NaiveDate) -> Result<WeekSlot, ApplicationError>;
    async fn week_status(&self, weekly_timesheet_id: &str) -> Result<Option<WeekStatus>, ApplicationError>;
    async fn attach_entry(
        &self,
        weekly_timesheet_id: &str,
        time_entry_id: &str,
        override_lock: bool,
    ) -> Result<(), ApplicationError>;
    async fn detach_entry(
        &self,
        weekly_timesheet_id: &str,
        time_entry_id: &str,
        override_lock: bool,
    ) -> Result<(), ApplicationError>;
}

/// Whether a project can take new time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAvailability {
    Missing,
    Inactive,
    Active,
}
