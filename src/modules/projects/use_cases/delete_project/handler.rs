use crate::modules::projects::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::use_cases::create_project::handler::{load_project, project_stream_id};
use crate::modules::projects::use_cases::delete_project::command::DeleteProject;
use crate::modules::projects::use_cases::delete_project::decide::decide_delete_project;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::{
    TimeEntryFilter, TimeEntryQueries,
};
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DeleteProjectHandler {
    topic: String,
    event_store: Arc<dyn EventStore<ProjectEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    entries: Arc<dyn TimeEntryQueries>,
}

impl DeleteProjectHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<ProjectEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        entries: Arc<dyn TimeEntryQueries>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            entries,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: DeleteProject) -> Result<(), ApplicationError> {
        let stream_id = project_stream_id(&command.project_id);
        let (state, version) = load_project(&*self.event_store, &stream_id).await?;
        let entry_count = self
            .entries
            .list(&TimeEntryFilter::for_project(&command.project_id))
            .await?
            .len();

        match decide_delete_project(&state, actor, command, entry_count) {
            Decision::Accepted { events, intents } => {
                self.event_store.append(&stream_id, version, &events).await?;
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                info!(stream_id, actor = %actor.username, "project deleted");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "project deletion rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
