use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let command = DeleteTimeEntry {
        time_entry_id,
        deleted_at: state.clock.now_millis(),
    };
    state.delete_time_entry.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
