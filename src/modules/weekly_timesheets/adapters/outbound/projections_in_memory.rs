use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::projections::{Mutation, apply};
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::projection::WeeklyTimesheetRow;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::queries_port::WeeklyTimesheetQueries;
use crate::shared::core::status::WeekStatus;
use crate::shared::infrastructure::projection::Projector;
use anyhow::bail;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWeeklyTimesheetProjections {
    rows: RwLock<HashMap<String, WeeklyTimesheetRow>>,
    is_offline: bool,
}

impl InMemoryWeeklyTimesheetProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            bail!("Projections repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl Projector<WeeklyTimesheetEvent> for InMemoryWeeklyTimesheetProjections {
    async fn project(&self, stream_id: &str, version: i64, event: &WeeklyTimesheetEvent) -> anyhow::Result<()> {
        self.ensure_online()?;
        let last_event_id = Some(format!("{stream_id}:{version}"));
        let mut rows = self.rows.write().await;
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Insert(row) => {
                    rows.insert(row.weekly_timesheet_id.clone(), row);
                }
                Mutation::AddEntry {
                    weekly_timesheet_id,
                    time_entry_id,
                    updated_at,
                } => {
                    if let Some(row) = rows.get_mut(&weekly_timesheet_id) {
                        if !row.entry_ids.contains(&time_entry_id) {
                            row.entry_ids.push(time_entry_id);
                        }
                        row.updated_at = updated_at;
                        row.last_event_id = last_event_id.clone();
                    }
                }
                Mutation::RemoveEntry {
                    weekly_timesheet_id,
                    time_entry_id,
                    updated_at,
                } => {
                    if let Some(row) = rows.get_mut(&weekly_timesheet_id) {
                        row.entry_ids.retain(|id| *id != time_entry_id);
                        row.updated_at = updated_at;
                        row.last_event_id = last_event_id.clone();
                    }
                }
                Mutation::Submit {
                    weekly_timesheet_id,
                    notes,
                    submitted_at,
                } => {
                    if let Some(row) = rows.get_mut(&weekly_timesheet_id) {
                        row.status = WeekStatus::Submitted;
                        row.notes = notes;
                        row.submitted_at = Some(submitted_at);
                        row.approved_by = None;
                        row.approved_at = None;
                        row.rejection_reason = None;
                        row.updated_at = submitted_at;
                        row.last_event_id = last_event_id.clone();
                    }
                }
                Mutation::Review {
                    weekly_timesheet_id,
                    status,
                    reviewed_by,
                    reviewed_at,
                    rejection_reason,
                } => {
                    if let Some(row) = rows.get_mut(&weekly_timesheet_id) {
                        row.status = status;
                        row.approved_by = Some(reviewed_by);
                        row.approved_at = Some(reviewed_at);
                        row.rejection_reason = rejection_reason;
                        row.updated_at = reviewed_at;
                        row.last_event_id = last_event_id.clone();
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl WeeklyTimesheetQueries for InMemoryWeeklyTimesheetProjections {
    async fn get(&self, weekly_timesheet_id: &str) -> anyhow::Result<Option<WeeklyTimesheetRow>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(weekly_timesheet_id).cloned())
    }

    async fn find(&self, user_id: &str, week_start: NaiveDate) -> anyhow::Result<Option<WeeklyTimesheetRow>> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|row| row.user_id == user_id && row.week_start == week_start)
            .cloned())
    }

    async fn list_submitted(&self) -> anyhow::Result<Vec<WeeklyTimesheetRow>> {
        self.ensure_online()?;
        let mut weeks: Vec<WeeklyTimesheetRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| row.status == WeekStatus::Submitted)
            .cloned()
            .collect();
        weeks.sort_by_key(|row| Reverse(row.submitted_at));
        Ok(weeks)
    }
}
