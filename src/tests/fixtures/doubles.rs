// In-process stand-ins for the ports one module uses to reach another.

use crate::modules::projects::use_cases::list_projects::projection::ProjectRow;
use crate::modules::projects::use_cases::list_projects::queries_port::ProjectQueries;
use crate::modules::time_entries::core::ports::{WeekLedger, WeekSlot};
use crate::modules::timers::core::ports::{TimeEntryLogger, TimerEntryOutcome};
use crate::modules::weekly_timesheets::core::ports::{EntryStatusMirror, WeekStatusChange};
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::week_bounds;
use crate::shared::core::status::WeekStatus;
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

/// Files every entry into a single week `wk-1` held in a fixed status.
pub struct FakeWeekLedger {
    status: WeekStatus,
    attached: Mutex<Vec<String>>,
}

impl FakeWeekLedger {
    pub fn with_status(status: WeekStatus) -> Self {
        Self {
            status,
            attached: Mutex::new(Vec::new()),
        }
    }

    pub async fn attached(&self) -> Vec<String> {
        self.attached.lock().await.clone()
    }

    fn guard(&self, override_lock: bool) -> Result<(), ApplicationError> {
        if self.status.is_editable() || override_lock {
            return Ok(());
        }
        Err(ApplicationError::Domain(format!(
            "cannot add entries to a {} week",
            self.status.as_str()
        )))
    }
}

#[async_trait]
impl WeekLedger for FakeWeekLedger {
    async fn open_week_for(&self, _user_id: &str, date: NaiveDate) -> Result<WeekSlot, ApplicationError> {
        let (week_start, week_end) = week_bounds(date);
        Ok(WeekSlot {
            weekly_timesheet_id: "wk-1".to_string(),
            week_start,
            week_end,
            status: self.status,
        })
    }

    async fn week_status(&self, _weekly_timesheet_id: &str) -> Result<Option<WeekStatus>, ApplicationError> {
        Ok(Some(self.status))
    }

    async fn attach_entry(
        &self,
        _weekly_timesheet_id: &str,
        time_entry_id: &str,
        override_lock: bool,
    ) -> Result<(), ApplicationError> {
        self.guard(override_lock)?;
        let mut attached = self.attached.lock().await;
        if !attached.iter().any(|id| id == time_entry_id) {
            attached.push(time_entry_id.to_string());
        }
        Ok(())
    }

    async fn detach_entry(
        &self,
        _weekly_timesheet_id: &str,
        time_entry_id: &str,
        override_lock: bool,
    ) -> Result<(), ApplicationError> {
        self.guard(override_lock)?;
        self.attached.lock().await.retain(|id| id != time_entry_id);
        Ok(())
    }
}

/// A fixed catalogue of active projects.
pub struct StaticProjects {
    rows: Vec<ProjectRow>,
}

impl StaticProjects {
    pub fn active(project_ids: &[&str]) -> Self {
        let rows = project_ids
            .iter()
            .map(|id| ProjectRow {
                project_id: id.to_string(),
                name: id.to_uppercase(),
                description: String::new(),
                created_by: "admin".to_string(),
                members: Vec::new(),
                budget_hours: None,
                is_active: true,
                created_at: 1,
                updated_at: 1,
                last_event_id: None,
            })
            .collect();
        Self { rows }
    }
}

#[async_trait]
impl ProjectQueries for StaticProjects {
    async fn get(&self, project_id: &str) -> anyhow::Result<Option<ProjectRow>> {
        Ok(self.rows.iter().find(|row| row.project_id == project_id).cloned())
    }

    async fn list(&self, include_inactive: bool) -> anyhow::Result<Vec<ProjectRow>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| include_inactive || row.is_active)
            .cloned()
            .collect())
    }

    async fn count_active(&self) -> anyhow::Result<u64> {
        Ok(self.rows.iter().filter(|row| row.is_active).count() as u64)
    }
}

/// Records every timer session handed over for logging.
pub struct RecordingEntryLogger {
    discard_reason: Option<String>,
    calls: Mutex<Vec<(String, String, i64, i64)>>,
    withdrawn: Mutex<Vec<(String, i64)>>,
}

impl RecordingEntryLogger {
    pub fn logging() -> Self {
        Self {
            discard_reason: None,
            calls: Mutex::new(Vec::new()),
            withdrawn: Mutex::new(Vec::new()),
        }
    }

    pub fn discarding(reason: &str) -> Self {
        Self {
            discard_reason: Some(reason.to_string()),
            calls: Mutex::new(Vec::new()),
            withdrawn: Mutex::new(Vec::new()),
        }
    }

    pub async fn calls(&self) -> Vec<(String, String, i64, i64)> {
        self.calls.lock().await.clone()
    }

    pub async fn withdrawn(&self) -> Vec<(String, i64)> {
        self.withdrawn.lock().await.clone()
    }
}

#[async_trait]
impl TimeEntryLogger for RecordingEntryLogger {
    async fn log_timer_entry(
        &self,
        _actor: &Actor,
        project_id: &str,
        description: &str,
        started_at: i64,
        stopped_at: i64,
    ) -> Result<TimerEntryOutcome, ApplicationError> {
        self.calls.lock().await.push((
            project_id.to_string(),
            description.to_string(),
            started_at,
            stopped_at,
        ));
        Ok(match &self.discard_reason {
            Some(reason) => TimerEntryOutcome::Discarded {
                reason: reason.clone(),
            },
            None => TimerEntryOutcome::Logged {
                time_entry_id: "te-timer".to_string(),
                duration_minutes: ((stopped_at - started_at) / 60_000).max(1),
            },
        })
    }

    async fn withdraw_timer_entry(
        &self,
        _actor: &Actor,
        time_entry_id: &str,
        withdrawn_at: i64,
    ) -> Result<(), ApplicationError> {
        self.withdrawn
            .lock()
            .await
            .push((time_entry_id.to_string(), withdrawn_at));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingMirror {
    changes: Mutex<Vec<WeekStatusChange>>,
}

impl RecordingMirror {
    pub async fn changes(&self) -> Vec<WeekStatusChange> {
        self.changes.lock().await.clone()
    }
}

#[async_trait]
impl EntryStatusMirror for RecordingMirror {
    async fn mirror_week_status(&self, change: &WeekStatusChange) -> Result<usize, ApplicationError> {
        self.changes.lock().await.push(change.clone());
        Ok(change.entry_ids.len())
    }
}
