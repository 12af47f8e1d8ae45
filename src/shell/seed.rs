use tracing::info;
use uuid::Uuid;

use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::actor::{Actor, Role};
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

const DEMO_USERS: [(&str, Role, &str, &str); 3] = [
    ("testadmin", Role::Admin, "Test", "Admin"),
    ("testmanager", Role::Manager, "Test", "Manager"),
    ("testworker", Role::Worker, "Test", "Worker"),
];

/// Registers the demo admin, manager and worker unless their usernames are
/// taken, and returns them in that order.
pub async fn seed_demo_users(state: &AppState) -> Result<Vec<Actor>, ApplicationError> {
    let mut actors = Vec::with_capacity(DEMO_USERS.len());
    for (username, role, first_name, last_name) in DEMO_USERS {
        if let Some(existing) = state.user_queries.find_by_username(username).await? {
            actors.push(existing.as_actor());
            continue;
        }
        let user_id = Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("user:{username}").as_bytes()).to_string();
        let command = RegisterUser {
            user_id: user_id.clone(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role,
            department: String::new(),
            registered_at: state.clock.now_millis(),
        };
        state.register_user.handle(&Actor::system(), command).await?;
        info!(username, role = role.as_str(), "demo user seeded");
        actors.push(Actor::new(&user_id, username, role));
    }
    Ok(actors)
}
