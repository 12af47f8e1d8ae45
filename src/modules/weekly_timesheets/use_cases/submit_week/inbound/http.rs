use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::weekly_timesheets::use_cases::submit_week::command::SubmitWeek;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::parse_week_start;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SubmitWeekBody {
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitWeekResponse {
    pub weekly_timesheet_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(week_start): Path<String>,
    body: Result<Json<SubmitWeekBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let week_start = parse_week_start(&week_start).map_err(ApplicationError::Validation)?;
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => SubmitWeekBody::default(),
        Err(e) => return Err(ApplicationError::Validation(e.body_text())),
    };
    let command = SubmitWeek {
        week_start,
        notes: body.notes.trim().to_string(),
        submitted_at: state.clock.now_millis(),
    };
    let weekly_timesheet_id = state.submit_week.handle(&actor, command).await?;
    Ok(Json(SubmitWeekResponse { weekly_timesheet_id }))
}
