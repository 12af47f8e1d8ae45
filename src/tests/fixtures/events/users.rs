use crate::modules::users::core::events::v1::user_registered::UserRegisteredV1;
use crate::shared::core::actor::Role;
use crate::tests::fixtures::actors::admin;

pub fn make_user_registered_v1_event(user_id: &str, username: &str, role: Role) -> UserRegisteredV1 {
    UserRegisteredV1 {
        user_id: user_id.to_string(),
        username: username.to_string(),
        email: format!("{username}@example.org"),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        role,
        department: "Engineering".to_string(),
        registered_at: 1_736_150_400_000,
        registered_by: admin().user_id,
    }
}
