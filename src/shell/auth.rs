use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolves the caller from the `x-user-id` header. Unknown and deactivated
/// users are not authenticated.
pub async fn resolve_actor(state: &AppState, headers: &HeaderMap) -> Result<Actor, ApplicationError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ApplicationError::Unauthenticated)?;
    state
        .user_queries
        .get(user_id)
        .await?
        .filter(|user| user.is_active)
        .map(|user| user.as_actor())
        .ok_or(ApplicationError::Unauthenticated)
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = ApplicationError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_actor(state, &parts.headers).await
    }
}
