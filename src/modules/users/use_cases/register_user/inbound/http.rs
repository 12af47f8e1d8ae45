use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::users::use_cases::register_user::command::RegisterUser;
use crate::shared::core::actor::{Actor, Role};
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterUserBody {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub department: String,
}

#[derive(Serialize)]
pub struct RegisterUserResponse {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<RegisterUserBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let user_id = Uuid::now_v7().to_string();

    let command = RegisterUser {
        user_id: user_id.clone(),
        username: body.username,
        email: body.email,
        first_name: body.first_name,
        last_name: body.last_name,
        role: body.role,
        department: body.department,
        registered_at: state.clock.now_millis(),
    };
    state.register_user.handle(&actor, command).await?;
    Ok((StatusCode::CREATED, Json(RegisterUserResponse { user_id })))
}
