use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::ports::WeekLedger;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::delete_time_entry::decide::decide_delete_time_entry;
use crate::modules::time_entries::use_cases::log_time_entry::handler::{load_time_entry, time_entry_stream_id};
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DeleteTimeEntryHandler {
    event_store: Arc<dyn EventStore<TimeEntryEvent>>,
    ledger: Arc<dyn WeekLedger>,
}

impl DeleteTimeEntryHandler {
    pub fn new(event_store: Arc<dyn EventStore<TimeEntryEvent>>, ledger: Arc<dyn WeekLedger>) -> Self {
        Self { event_store, ledger }
    }

    pub async fn handle(&self, actor: &Actor, command: DeleteTimeEntry) -> Result<(), ApplicationError> {
        let time_entry_id = command.time_entry_id.clone();
        let stream_id = time_entry_stream_id(&time_entry_id);
        let (state, version) = load_time_entry(&*self.event_store, &stream_id).await?;
        let week_id = match &state {
            TimeEntryState::Logged(entry) => Some(entry.weekly_timesheet_id.clone()),
            _ => None,
        };
        let week_status = match &week_id {
            Some(id) => self.ledger.week_status(id).await?,
            None => None,
        };

        match decide_delete_time_entry(&state, actor, command, week_status) {
            Decision::Accepted { events, .. } => {
                self.event_store.append(&stream_id, version, &events).await?;
                if let Some(week_id) = &week_id {
                    // Lock was checked by the decision; the deletion stands either way.
                    self.ledger.detach_entry(week_id, &time_entry_id, true).await?;
                }
                info!(stream_id, actor = %actor.username, "time entry deleted");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "time entry deletion rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
