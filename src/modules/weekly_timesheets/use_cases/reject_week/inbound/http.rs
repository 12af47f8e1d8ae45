use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::weekly_timesheets::use_cases::reject_week::command::RejectWeek;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RejectWeekBody {
    #[serde(default)]
    pub reason: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(weekly_timesheet_id): Path<String>,
    body: Result<Json<RejectWeekBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let command = RejectWeek {
        weekly_timesheet_id,
        reason: body.reason,
        rejected_at: state.clock.now_millis(),
    };
    state.reject_week.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}
