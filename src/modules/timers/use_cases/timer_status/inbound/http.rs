use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{datetime_of_millis, elapsed_label};
use crate::shell::state::AppState;

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum TimerStatus {
    Idle {
        is_running: bool,
    },
    Running {
        is_running: bool,
        timer_id: String,
        project: String,
        description: String,
        start_time: String,
        elapsed_minutes: i64,
        elapsed_time: String,
    },
}

/// Shared by the dashboard, which shows the same running timer.
pub async fn timer_status_for(state: &AppState, actor: &Actor) -> Result<TimerStatus, ApplicationError> {
    let Some(timer) = state.timer_queries.running_for(&actor.user_id).await? else {
        return Ok(TimerStatus::Idle { is_running: false });
    };
    let project = state
        .project_queries
        .get(&timer.project_id)
        .await?
        .map(|project| project.name)
        .unwrap_or_else(|| timer.project_id.clone());
    let elapsed_minutes = timer.elapsed_minutes(state.clock.now_millis());
    Ok(TimerStatus::Running {
        is_running: true,
        start_time: datetime_of_millis(timer.started_at)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        elapsed_time: elapsed_label(elapsed_minutes),
        elapsed_minutes,
        timer_id: timer.timer_id,
        project,
        description: timer.description,
    })
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(timer_status_for(&state, &actor).await?))
}
