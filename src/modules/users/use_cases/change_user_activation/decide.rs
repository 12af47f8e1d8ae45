use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::events::v1::user_activation_changed::UserActivationChangedV1;
use crate::modules::users::core::intents::UserIntent;
use crate::modules::users::core::state::UserState;
use crate::modules::users::use_cases::change_user_activation::command::ChangeUserActivation;
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
    #[error("you cannot deactivate your own account")]
    SelfDeactivation,
    #[error("user is already active")]
    AlreadyActive,
    #[error("user is already inactive")]
    AlreadyInactive,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotAdmin => RejectionKind::Forbidden,
            DecideError::NotFound => RejectionKind::NotFound,
            DecideError::SelfDeactivation => RejectionKind::Invalid,
            DecideError::AlreadyActive | DecideError::AlreadyInactive => RejectionKind::Conflict,
        }
    }
}

pub fn decide_change_user_activation(
    state: &UserState,
    actor: &Actor,
    command: ChangeUserActivation,
) -> Decision<UserEvent, UserIntent, DecideError> {
    if !actor.is_admin() {
        return Decision::reject(DecideError::NotAdmin);
    }
    let UserState::Registered(account) = state else {
        return Decision::reject(DecideError::NotFound);
    };
    if !command.is_active && actor.owns(&account.user_id) {
        return Decision::reject(DecideError::SelfDeactivation);
    }
    match (account.is_active, command.is_active) {
        (true, true) => return Decision::reject(DecideError::AlreadyActive),
        (false, false) => return Decision::reject(DecideError::AlreadyInactive),
        _ => {}
    }

    let payload = UserActivationChangedV1 {
        user_id: command.user_id,
        is_active: command.is_active,
        changed_at: command.changed_at,
        changed_by: actor.user_id.clone(),
    };
    Decision::Accepted {
        events: vec![UserEvent::UserActivationChangedV1(payload.clone())],
        intents: vec![UserIntent::PublishUserActivationChanged { payload }],
    }
}

#[cfg(test)]
mod change_user_activation_decide_tests {
    use super::*;
    use crate::modules::users::core::evolve::evolve;
    use crate::shared::core::actor::Role;
    use crate::tests::fixtures::actors::admin;
    use crate::tests::fixtures::events::users::make_user_registered_v1_event;
    use rstest::rstest;

    fn active(user_id: &str) -> UserState {
        evolve(
            UserState::None,
            UserEvent::UserRegisteredV1(make_user_registered_v1_event(user_id, "bob", Role::Worker)),
        )
    }

    fn change(user_id: &str, is_active: bool) -> ChangeUserActivation {
        ChangeUserActivation {
            user_id: user_id.into(),
            is_active,
            changed_at: 9,
        }
    }

    #[rstest]
    fn it_should_deactivate_then_reactivate() {
        let state = active("u-2");
        let Decision::Accepted { events, intents } =
            decide_change_user_activation(&state, &admin(), change("u-2", false))
        else {
            panic!("expected deactivation");
        };
        assert_eq!(intents.len(), 1);
        let state = events.into_iter().fold(state, evolve);
        assert!(decide_change_user_activation(&state, &admin(), change("u-2", true)).is_accepted());
    }

    #[rstest]
    fn it_should_not_let_an_admin_deactivate_themselves() {
        let own = admin().user_id;
        match decide_change_user_activation(&active(&own), &admin(), change(&own, false)) {
            Decision::Rejected { reason } => assert_eq!(reason, DecideError::SelfDeactivation),
            Decision::Accepted { .. } => panic!("expected rejection"),
        }
    }

    #[rstest]
    fn it_should_reject_a_no_op_change() {
        match decide_change_user_activation(&active("u-2"), &admin(), change("u-2", true)) {
            Decision::Rejected { reason } => assert_eq!(reason, DecideError::AlreadyActive),
            Decision::Accepted { .. } => panic!("expected rejection"),
        }
    }
}
