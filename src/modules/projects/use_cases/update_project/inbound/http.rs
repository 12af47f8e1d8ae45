use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::projects::use_cases::update_project::command::UpdateProject;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

fn active_by_default() -> bool {
    true
}

#[derive(Deserialize)]
pub struct UpdateProjectBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub budget_hours: Option<f64>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(project_id): Path<String>,
    body: Result<Json<UpdateProjectBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let command = UpdateProject {
        project_id,
        name: body.name,
        description: body.description,
        budget_hours: body.budget_hours,
        is_active: body.is_active,
        updated_at: state.clock.now_millis(),
    };
    state.update_project.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
