use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::projections::{Mutation, apply};
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::{
    TimeEntryFilter, TimeEntryQueries,
};
use crate::shared::core::primitives::minutes_to_hours;
use crate::shared::infrastructure::projection::Projector;
use anyhow::bail;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimeEntryProjections {
    rows: RwLock<HashMap<String, TimeEntryRow>>,
    is_offline: bool,
}

impl InMemoryTimeEntryProjections {
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
impl Projector<TimeEntryEvent> for InMemoryTimeEntryProjections {
    async fn project(&self, stream_id: &str, version: i64, event: &TimeEntryEvent) -> anyhow::Result<()> {
        self.ensure_online()?;
        let last_event_id = Some(format!("{stream_id}:{version}"));
        let mut rows = self.rows.write().await;
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Insert(row) => {
                    rows.insert(row.time_entry_id.clone(), row);
                }
                Mutation::Revise {
                    time_entry_id,
                    project_id,
                    date,
                    started_at,
                    ended_at,
                    duration_minutes,
                    description,
                    weekly_timesheet_id,
                    updated_at,
                } => {
                    if let Some(row) = rows.get_mut(&time_entry_id) {
                        row.project_id = project_id;
                        row.date = date;
                        row.started_at = started_at;
                        row.ended_at = ended_at;
                        row.duration_minutes = duration_minutes;
                        row.duration_hours = minutes_to_hours(duration_minutes);
                        row.description = description;
                        row.weekly_timesheet_id = weekly_timesheet_id;
                        row.updated_at = updated_at;
                        row.last_event_id = last_event_id.clone();
                    }
                }
                Mutation::SetStatus {
                    time_entry_id,
                    status,
                    approved_by,
                    approved_at,
                    rejection_reason,
                    updated_at,
                } => {
                    if let Some(row) = rows.get_mut(&time_entry_id) {
                        row.status = status;
                        row.approved_by = approved_by;
                        row.approved_at = approved_at;
                        row.rejection_reason = rejection_reason;
                        row.updated_at = updated_at;
                        row.last_event_id = last_event_id.clone();
                    }
                }
                Mutation::Remove { time_entry_id } => {
                    rows.remove(&time_entry_id);
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TimeEntryQueries for InMemoryTimeEntryProjections {
    async fn get(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryRow>> {
        self.ensure_online()?;
        Ok(self.rows.read().await.get(time_entry_id).cloned())
    }

    async fn list(&self, filter: &TimeEntryFilter) -> anyhow::Result<Vec<TimeEntryRow>> {
        self.ensure_online()?;
        let mut entries: Vec<TimeEntryRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        entries.sort_by_key(|row| (Reverse(row.date), Reverse(row.created_at)));
        Ok(entries)
    }

    async fn recent_for_user(&self, user_id: &str, limit: usize) -> anyhow::Result<Vec<TimeEntryRow>> {
        self.ensure_online()?;
        let mut entries: Vec<TimeEntryRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by_key(|row| Reverse(row.created_at));
        entries.truncate(limit);
        Ok(entries)
    }
}
