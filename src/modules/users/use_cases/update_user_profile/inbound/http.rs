use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::users::use_cases::update_user_profile::command::UpdateUserProfile;
use crate::shared::core::actor::{Actor, Role};
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateUserProfileBody {
    pub role: Role,
    #[serde(default)]
    pub department: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
    body: Result<Json<UpdateUserProfileBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let command = UpdateUserProfile {
        user_id,
        role: body.role,
        department: body.department,
        updated_at: state.clock.now_millis(),
    };
    state.update_user_profile.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
