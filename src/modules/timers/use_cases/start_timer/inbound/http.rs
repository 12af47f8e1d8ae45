use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::timers::use_cases::start_timer::command::StartTimer;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartTimerBody {
    pub project_id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub struct StartTimerResponse {
    pub timer_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<StartTimerBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let command = StartTimer {
        timer_id: Uuid::now_v7().to_string(),
        project_id: body.project_id,
        description: body.description,
        started_at: state.clock.now_millis(),
    };
    let timer_id = state.start_timer.handle(&actor, command).await?;
    Ok((StatusCode::CREATED, Json(StartTimerResponse { timer_id })))
}

#[cfg(test)]
mod start_timer_http_inbound_tests {
    use crate::tests::fixtures::app::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn it_should_start_once_and_refuse_a_second_timer() {
        let app = TestApp::start().await;
        let project_id = app.create_project("Apollo").await;
        let body = json!({ "project_id": project_id, "description": "deep work" });

        let (status, started) = app.post("/timer/start", &app.worker, body.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(started["timer_id"].is_string());

        let (status, error) = app.post("/timer/start", &app.worker, body).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(error["error"].as_str().unwrap().contains("already have a running timer"));
    }

    #[tokio::test]
    async fn it_should_refuse_an_unknown_project() {
        let app = TestApp::start().await;
        let (status, _) = app
            .post("/timer/start", &app.worker, json!({ "project_id": "nope" }))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
