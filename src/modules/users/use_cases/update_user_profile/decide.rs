use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::events::v1::user_profile_updated::UserProfileUpdatedV1;
use crate::modules::users::core::intents::UserIntent;
use crate::modules::users::core::state::UserState;
use crate::modules::users::use_cases::update_user_profile::command::UpdateUserProfile;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("only admins can manage users")]
    NotAdmin,
    #[error("user not found")]
    NotFound,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotAdmin => RejectionKind::Forbidden,
            DecideError::NotFound => RejectionKind::NotFound,
        }
    }
}

pub fn decide_update_user_profile(
    state: &UserState,
    actor: &Actor,
    command: UpdateUserProfile,
) -> Decision<UserEvent, UserIntent, DecideError> {
    if !actor.is_admin() {
        return Decision::reject(DecideError::NotAdmin);
    }
    let UserState::Registered(_) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    Decision::accept(vec![UserEvent::UserProfileUpdatedV1(UserProfileUpdatedV1 {
        user_id: command.user_id,
        role: command.role,
        department: command.department.trim().to_string(),
        updated_at: command.updated_at,
        updated_by: actor.user_id.clone(),
    })])
}
