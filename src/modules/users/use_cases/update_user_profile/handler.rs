use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::evolve::evolve;
use crate::modules::users::core::state::UserState;
use crate::modules::users::use_cases::register_user::handler::user_stream_id;
use crate::modules::users::use_cases::update_user_profile::command::UpdateUserProfile;
use crate::modules::users::use_cases::update_user_profile::decide::decide_update_user_profile;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct UpdateUserProfileHandler {
    event_store: Arc<dyn EventStore<UserEvent>>,
}

impl UpdateUserProfileHandler {
    pub fn new(event_store: Arc<dyn EventStore<UserEvent>>) -> Self {
        Self { event_store }
    }

    pub async fn handle(
        &self,
        actor: &Actor,
        command: UpdateUserProfile,
    ) -> Result<(), ApplicationError> {
        let stream_id = user_stream_id(&command.user_id);
        let stream = self.event_store.load(&stream_id).await?;
        let version = stream.version;
        let state = stream.events.into_iter().fold(UserState::None, evolve);

        match decide_update_user_profile(&state, actor, command) {
            Decision::Accepted { events, .. } => {
                self.event_store.append(&stream_id, version, &events).await?;
                info!(stream_id, actor = %actor.username, "user profile updated");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "user profile update rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
