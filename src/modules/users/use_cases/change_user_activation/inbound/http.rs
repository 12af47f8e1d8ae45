use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::users::use_cases::change_user_activation::command::ChangeUserActivation;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

async fn change(
    state: AppState,
    actor: Actor,
    user_id: String,
    is_active: bool,
) -> Result<StatusCode, ApplicationError> {
    let command = ChangeUserActivation {
        user_id,
        is_active,
        changed_at: state.clock.now_millis(),
    };
    state.change_user_activation.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn deactivate(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    change(state, actor, user_id, false).await
}

pub async fn activate(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    change(state, actor, user_id, true).await
}
