use crate::modules::time_entries::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::log_time_entry::handler::{load_time_entry, time_entry_stream_id};
use crate::modules::time_entries::use_cases::review_time_entry::command::ReviewTimeEntry;
use crate::modules::time_entries::use_cases::review_time_entry::decide::decide_review_time_entry;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ReviewTimeEntryHandler {
    topic: String,
    event_store: Arc<dyn EventStore<TimeEntryEvent>>,
    outbox: Arc<dyn DomainOutbox>,
}

impl ReviewTimeEntryHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<TimeEntryEvent>>,
        outbox: Arc<dyn DomainOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: ReviewTimeEntry) -> Result<(), ApplicationError> {
        let stream_id = time_entry_stream_id(&command.time_entry_id);
        let (state, version) = load_time_entry(&*self.event_store, &stream_id).await?;

        match decide_review_time_entry(&state, actor, command) {
            Decision::Accepted { events, intents } => {
                self.event_store.append(&stream_id, version, &events).await?;
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                info!(stream_id, reviewer = %actor.username, "time entry reviewed");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "time entry review rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
