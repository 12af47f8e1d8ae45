use crate::modules::projects::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::core::evolve::evolve;
use crate::modules::projects::core::state::ProjectState;
use crate::modules::projects::use_cases::create_project::command::CreateProject;
use crate::modules::projects::use_cases::create_project::decide::decide_create_project;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub fn project_stream_id(project_id: &str) -> String {
    format!("Project-{project_id}")
}

/// Loads a project stream and folds it into its current state.
pub async fn load_project(
    event_store: &dyn EventStore<ProjectEvent>,
    stream_id: &str,
) -> Result<(ProjectState, i64), ApplicationError> {
    let stream = event_store.load(stream_id).await?;
    Ok(stream.fold(ProjectState::None, evolve))
}

pub struct CreateProjectHandler {
    topic: String,
    event_store: Arc<dyn EventStore<ProjectEvent>>,
    outbox: Arc<dyn DomainOutbox>,
}

impl CreateProjectHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<ProjectEvent>>,
        outbox: Arc<dyn DomainOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: CreateProject) -> Result<(), ApplicationError> {
        let stream_id = project_stream_id(&command.project_id);
        let (state, version) = load_project(&*self.event_store, &stream_id).await?;

        match decide_create_project(&state, actor, command) {
            Decision::Accepted { events, intents } => {
                self.event_store.append(&stream_id, version, &events).await?;
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                info!(stream_id, actor = %actor.username, "project created");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "project creation rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
