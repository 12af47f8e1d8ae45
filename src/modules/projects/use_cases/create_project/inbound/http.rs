use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::projects::use_cases::create_project::command::CreateProject;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateProjectBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub budget_hours: Option<f64>,
}

#[derive(Serialize)]
pub struct CreateProjectResponse {
    pub project_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let project_id = Uuid::now_v7().to_string();
    let command = CreateProject {
        project_id: project_id.clone(),
        name: body.name,
        description: body.description,
        budget_hours: body.budget_hours,
        created_at: state.clock.now_millis(),
    };
    state.create_project.handle(&actor, command).await?;
    Ok((StatusCode::CREATED, Json(CreateProjectResponse { project_id })))
}
