use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::projects::use_cases::assign_project_members::command::AssignProjectMembers;
use crate::modules::projects::use_cases::assign_project_members::decide::decide_assign_project_members;
use crate::modules::projects::use_cases::create_project::handler::{load_project, project_stream_id};
use crate::modules::users::use_cases::list_users::queries_port::UserQueries;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct AssignProjectMembersHandler {
    event_store: Arc<dyn EventStore<ProjectEvent>>,
    users: Arc<dyn UserQueries>,
}

impl AssignProjectMembersHandler {
    pub fn new(event_store: Arc<dyn EventStore<ProjectEvent>>, users: Arc<dyn UserQueries>) -> Self {
        Self { event_store, users }
    }

    pub async fn handle(
        &self,
        actor: &Actor,
        command: AssignProjectMembers,
    ) -> Result<(), ApplicationError> {
        let stream_id = project_stream_id(&command.project_id);
        let (state, version) = load_project(&*self.event_store, &stream_id).await?;
        let mut unknown_members = Vec::new();
        for member_id in &command.member_ids {
            if self.users.get(member_id).await?.is_none() {
                unknown_members.push(member_id.clone());
            }
        }

        match decide_assign_project_members(&state, actor, command, unknown_members) {
            Decision::Accepted { events, .. } => {
                self.event_store.append(&stream_id, version, &events).await?;
                info!(stream_id, actor = %actor.username, "project members assigned");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "project member assignment rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
