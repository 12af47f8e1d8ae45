use crate::modules::users::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::evolve::evolve;
use crate::modules::users::core::state::UserState;
use crate::modules::users::use_cases::change_user_activation::command::ChangeUserActivation;
use crate::modules::users::use_cases::change_user_activation::decide::decide_change_user_activation;
use crate::modules::users::use_cases::register_user::handler::user_stream_id;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ChangeUserActivationHandler {
    topic: String,
    event_store: Arc<dyn EventStore<UserEvent>>,
    outbox: Arc<dyn DomainOutbox>,
}

impl ChangeUserActivationHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<UserEvent>>,
        outbox: Arc<dyn DomainOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn handle(
        &self,
        actor: &Actor,
        command: ChangeUserActivation,
    ) -> Result<(), ApplicationError> {
        let stream_id = user_stream_id(&command.user_id);
        let stream = self.event_store.load(&stream_id).await?;
        let version = stream.version;
        let state = stream.events.into_iter().fold(UserState::None, evolve);
        let is_active = command.is_active;

        match decide_change_user_activation(&state, actor, command) {
            Decision::Accepted { events, intents } => {
                self.event_store.append(&stream_id, version, &events).await?;
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                info!(stream_id, is_active, actor = %actor.username, "user activation changed");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "user activation change rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
