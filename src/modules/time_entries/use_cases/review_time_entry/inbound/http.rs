use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::review_time_entry::command::{ReviewTimeEntry, Verdict};
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RejectBody {
    pub reason: Option<String>,
}

pub async fn approve(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let command = ReviewTimeEntry {
        time_entry_id,
        verdict: Verdict::Approve,
        reviewed_at: state.clock.now_millis(),
    };
    state.review_time_entry.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// The body is optional; an empty request rejects without a reason.
pub async fn reject(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
    body: Result<Json<RejectBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let reason = match body {
        Ok(Json(body)) => body.reason,
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(e) => return Err(ApplicationError::Validation(e.body_text())),
    };
    let command = ReviewTimeEntry {
        time_entry_id,
        verdict: Verdict::Reject { reason },
        reviewed_at: state.clock.now_millis(),
    };
    state.review_time_entry.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
