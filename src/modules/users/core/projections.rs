use crate::modules::users::core::events::UserEvent;
use crate::modules::users::use_cases::list_users::projection::UserRow;
use crate::shared::core::actor::Role;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Insert(UserRow),
    UpdateProfile {
        user_id: String,
        role: Role,
        department: String,
        updated_at: i64,
    },
    SetActive {
        user_id: String,
        is_active: bool,
        updated_at: i64,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &UserEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        UserEvent::UserRegisteredV1(e) => vec![Mutation::Insert(UserRow {
            user_id: e.user_id.clone(),
            username: e.username.clone(),
            email: e.email.clone(),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            role: e.role,
            department: e.department.clone(),
            is_active: true,
            registered_at: e.registered_at,
            updated_at: e.registered_at,
            last_event_id: Some(stream_key),
        })],
        UserEvent::UserProfileUpdatedV1(e) => vec![Mutation::UpdateProfile {
            user_id: e.user_id.clone(),
            role: e.role,
            department: e.department.clone(),
            updated_at: e.updated_at,
        }],
        UserEvent::UserActivationChangedV1(e) => vec![Mutation::SetActive {
            user_id: e.user_id.clone(),
            is_active: e.is_active,
            updated_at: e.changed_at,
        }],
    }
}
