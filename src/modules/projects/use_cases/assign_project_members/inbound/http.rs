use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::projects::use_cases::assign_project_members::command::AssignProjectMembers;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AssignProjectMembersBody {
    pub member_ids: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(project_id): Path<String>,
    body: Result<Json<AssignProjectMembersBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let command = AssignProjectMembers {
        project_id,
        member_ids: body.member_ids,
        assigned_at: state.clock.now_millis(),
    };
    state.assign_project_members.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
