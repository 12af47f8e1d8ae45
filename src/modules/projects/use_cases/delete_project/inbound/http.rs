use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::projects::use_cases::delete_project::command::DeleteProject;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let command = DeleteProject {
        project_id,
        deleted_at: state.clock.now_millis(),
    };
    state.delete_project.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
