use crate::modules::users::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::evolve::evolve;
use crate::modules::users::core::state::UserState;
use crate::modules::users::use_cases::list_users::queries_port::UserQueries;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::modules::users::use_cases::register_user::decide::decide_register_user;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub fn user_stream_id(user_id: &str) -> String {
    format!("User-{user_id}")
}

pub struct RegisterUserHandler {
    topic: String,
    event_store: Arc<dyn EventStore<UserEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    users: Arc<dyn UserQueries>,
}

impl RegisterUserHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<UserEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        users: Arc<dyn UserQueries>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            users,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: RegisterUser) -> Result<(), ApplicationError> {
        let stream_id = user_stream_id(&command.user_id);
        let stream = self.event_store.load(&stream_id).await?;
        let version = stream.version;
        let state = stream.events.into_iter().fold(UserState::None, evolve);
        let username_taken = self
            .users
            .find_by_username(command.username.trim())
            .await?
            .is_some();

        match decide_register_user(&state, actor, command, username_taken) {
            Decision::Accepted { events, intents } => {
                self.event_store.append(&stream_id, version, &events).await?;
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                info!(stream_id, actor = %actor.username, "user registered");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "user registration rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
