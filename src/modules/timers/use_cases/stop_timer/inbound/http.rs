use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::timers::core::ports::TimerEntryOutcome;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct StopTimerResponse {
    pub timer_id: String,
    #[serde(flatten)]
    pub outcome: TimerEntryOutcome,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(timer_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let outcome = state
        .stop_timer
        .handle(&actor, &timer_id, state.clock.now_millis())
        .await?;
    Ok(Json(StopTimerResponse { timer_id, outcome }))
}
