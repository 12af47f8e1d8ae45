use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::use_cases::create_project::handler::{load_project, project_stream_id};
use crate::modules::projects::use_cases::update_project::command::UpdateProject;
use crate::modules::projects::use_cases::update_project::decide::decide_update_project;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct UpdateProjectHandler {
    event_store: Arc<dyn EventStore<ProjectEvent>>,
}

impl UpdateProjectHandler {
    pub fn new(event_store: Arc<dyn EventStore<ProjectEvent>>) -> Self {
        Self { event_store }
    }

    pub async fn handle(&self, actor: &Actor, command: UpdateProject) -> Result<(), ApplicationError> {
        let stream_id = project_stream_id(&command.project_id);
        let (state, version) = load_project(&*self.event_store, &stream_id).await?;

        match decide_update_project(&state, actor, command) {
            Decision::Accepted { events, .. } => {
                self.event_store.append(&stream_id, version, &events).await?;
                info!(stream_id, actor = %actor.username, "project updated");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "project update rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
