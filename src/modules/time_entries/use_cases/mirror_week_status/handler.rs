use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::log_time_entry::handler::{load_time_entry, time_entry_stream_id};
use crate::modules::time_entries::use_cases::mirror_week_status::decide::decide_mirror_week_status;
use crate::modules::weekly_timesheets::core::ports::{EntryStatusMirror, WeekStatusChange};
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Reviews racing the mirror are retried against the fresh stream this many times.
const MAX_ATTEMPTS: usize = 3;

pub struct MirrorWeekStatusHandler {
    event_store: Arc<dyn EventStore<TimeEntryEvent>>,
}

impl MirrorWeekStatusHandler {
    pub fn new(event_store: Arc<dyn EventStore<TimeEntryEvent>>) -> Self {
        Self { event_store }
    }

    /// Whether the entry changed.
    async fn mirror_entry(&self, time_entry_id: &str, change: &WeekStatusChange) -> Result<bool, ApplicationError> {
        let stream_id = time_entry_stream_id(time_entry_id);
        let mut attempt = 1;
        loop {
            let (state, version) = load_time_entry(&*self.event_store, &stream_id).await?;
            let events = match decide_mirror_week_status(&state, change) {
                Decision::Accepted { events, .. } => events,
                Decision::Rejected { reason } => {
                    debug!(stream_id, %reason, "entry left as is");
                    return Ok(false);
                }
            };
            match self.event_store.append(&stream_id, version, &events).await {
                Ok(()) => return Ok(true),
                Err(EventStoreError::VersionMismatch { .. }) if attempt < MAX_ATTEMPTS => {
                    debug!(stream_id, attempt, "entry moved underneath the mirror, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[async_trait]
impl EntryStatusMirror for MirrorWeekStatusHandler {
    /// The week change is already committed, so one stubborn entry does not
    /// stop the others from following it.
    async fn mirror_week_status(&self, change: &WeekStatusChange) -> Result<usize, ApplicationError> {
        let mut mirrored = 0;
        let mut failed = 0;
        for time_entry_id in &change.entry_ids {
            match self.mirror_entry(time_entry_id, change).await {
                Ok(true) => mirrored += 1,
                Ok(false) => {}
                Err(e) => {
                    failed += 1;
                    error!(%time_entry_id, error = %e, "entry did not follow its week");
                }
            }
        }
        info!(
            week = %change.weekly_timesheet_id,
            status = %change.status,
            mirrored,
            failed,
            "week status mirrored onto entries"
        );
        Ok(mirrored)
    }
}
