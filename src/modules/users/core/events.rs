pub mod v1 {
    pub mod user_activation_changed;
    pub mod user_profile_updated;
    pub mod user_registered;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum UserEvent {
    UserRegisteredV1(v1::user_registered::UserRegisteredV1),
    UserProfileUpdatedV1(v1::user_profile_updated::UserProfileUpdatedV1),
    UserActivationChangedV1(v1::user_activation_changed::UserActivationChangedV1),
}
