use crate::modules::users::core::events::v1::user_activation_changed::UserActivationChangedV1;
use crate::modules::users::core::events::v1::user_registered::UserRegisteredV1;

/// Integration messages published alongside accepted user decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    PublishUserRegistered { payload: UserRegisteredV1 },
    PublishUserActivationChanged { payload: UserActivationChangedV1 },
}
