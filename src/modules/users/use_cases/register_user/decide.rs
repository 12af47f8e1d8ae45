use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::events::v1::user_registered::UserRegisteredV1;
use crate::modules::users::core::intents::UserIntent;
use crate::modules::users::core::state::UserState;
use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only admins can manage users")]
    NotAdmin,
    #[error("username is required")]
    BlankUsername,
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),
    #[error("user already exists")]
    AlreadyExists,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotAdmin => RejectionKind::Forbidden,
            DecideError::BlankUsername => RejectionKind::Invalid,
            DecideError::UsernameTaken(_) | DecideError::AlreadyExists => RejectionKind::Conflict,
        }
    }
}

/// `username_taken` is looked up by the caller in the user directory.
pub fn decide_register_user(
    state: &UserState,
    actor: &Actor,
    command: RegisterUser,
    username_taken: bool,
) -> Decision<UserEvent, UserIntent, DecideError> {
    if !actor.is_admin() {
        return Decision::reject(DecideError::NotAdmin);
    }
    if !matches!(state, UserState::None) {
        return Decision::reject(DecideError::AlreadyExists);
    }
    let username = command.username.trim().to_string();
    if username.is_empty() {
        return Decision::reject(DecideError::BlankUsername);
    }
    if username_taken {
        return Decision::reject(DecideError::UsernameTaken(username));
    }

    let payload = UserRegisteredV1 {
        user_id: command.user_id,
        username,
        email: command.email.trim().to_string(),
        first_name: command.first_name.trim().to_string(),
        last_name: command.last_name.trim().to_string(),
        role: command.role,
        department: command.department.trim().to_string(),
        registered_at: command.registered_at,
        registered_by: actor.user_id.clone(),
    };
    Decision::Accepted {
        events: vec![UserEvent::UserRegisteredV1(payload.clone())],
        intents: vec![UserIntent::PublishUserRegistered { payload }],
    }
}
