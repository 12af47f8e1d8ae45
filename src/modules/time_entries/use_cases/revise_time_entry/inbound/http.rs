use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::time_entries::use_cases::log_time_entry::inbound::http::TimeEntryBody;
use crate::modules::time_entries::use_cases::revise_time_entry::command::ReviseTimeEntry;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
    body: Result<Json<TimeEntryBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let command = ReviseTimeEntry {
        time_entry_id,
        span: body.span()?,
        project_id: body.project_id,
        description: body.description,
        revised_at: state.clock.now_millis(),
    };
    state.revise_time_entry.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
