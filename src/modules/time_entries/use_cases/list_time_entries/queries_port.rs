use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::shared::core::status::EntryStatus;
use async_trait::async_trait;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryFilter {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub status: Option<EntryStatus>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub weekly_timesheet_id: Option<String>,
}

impl TimeEntryFilter {
    pub fn for_project(project_id: &str) -> Self {
        Self {
            project_id: Some(project_id.to_string()),
            ..Self::default()
        }
    }

    pub fn for_week(weekly_timesheet_id: &str) -> Self {
        Self {
            weekly_timesheet_id: Some(weekly_timesheet_id.to_string()),
            ..Self::default()
        }
    }

    pub fn pending() -> Self {
        Self {
            status: Some(EntryStatus::Pending),
            ..Self::default()
        }
    }

    /// Date bounds are inclusive.
    pub fn matches(&self, row: &TimeEntryRow) -> bool {
        self.user_id.as_ref().is_none_or(|id| *id == row.user_id)
            && self.project_id.as_ref().is_none_or(|id| *id == row.project_id)
            && self.status.is_none_or(|status| status == row.status)
            && self.date_from.is_none_or(|from| row.date >= from)
            && self.date_to.is_none_or(|to| row.date <= to)
            && self
                .weekly_timesheet_id
                .as_ref()
                .is_none_or(|id| *id == row.weekly_timesheet_id)
    }
}

#[async_trait]
pub trait TimeEntryQueries: Send + Sync {
    async fn get(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryRow>>;
    /// Matching entries, newest date first, then newest created first.
    async fn list(&self, filter: &TimeEntryFilter) -> anyhow::Result<Vec<TimeEntryRow>>;
    /// The user's most recently created entries.
    async fn recent_for_user(&self, user_id: &str, limit: usize) -> anyhow::Result<Vec<TimeEntryRow>>;
}
