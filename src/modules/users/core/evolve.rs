use crate::modules::users::core::events::UserEvent;
use crate::modules::users::core::state::{UserAccount, UserState};

pub fn evolve(state: UserState, event: UserEvent) -> UserState {
    match (state, event) {
        (UserState::None, UserEvent::UserRegisteredV1(e)) => UserState::Registered(UserAccount {
            user_id: e.user_id,
            username: e.username,
            email: e.email,
            first_name: e.first_name,
            last_name: e.last_name,
            role: e.role,
            department: e.department,
            is_active: true,
            registered_at: e.registered_at,
            updated_at: e.registered_at,
        }),
        (UserState::Registered(account), UserEvent::UserProfileUpdatedV1(e)) => {
            UserState::Registered(UserAccount {
                role: e.role,
                department: e.department,
                updated_at: e.updated_at,
                ..account
            })
        }
        (UserState::Registered(account), UserEvent::UserActivationChangedV1(e)) => {
            UserState::Registered(UserAccount {
                is_active: e.is_active,
                updated_at: e.changed_at,
                ..account
            })
        }
        (state, _) => state,
    }
}
