use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::weekly_timesheets::use_cases::approve_week::command::ApproveWeek;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(weekly_timesheet_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let command = ApproveWeek {
        weekly_timesheet_id,
        approved_at: state.clock.now_millis(),
    };
    state.approve_week.handle(&actor, command).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod approve_week_http_inbound_tests {
    use crate::tests::fixtures::app::TestApp;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn it_should_not_find_an_unknown_week() {
        let app = TestApp::start().await;
        let (status, _) = app
            .post_empty("/approvals/weekly/missing/approve", &app.manager)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_refuse_a_draft_week() {
        let app = TestApp::start().await;
        let project_id = app.create_project("Apollo").await;
        app.log_entry(&app.worker, &project_id, "2025-01-06", "09:00", "10:00")
            .await;
        let (_, week) = app.get("/weekly/2025-01-06", &app.worker).await;
        let id = week["timesheet"]["weekly_timesheet_id"].as_str().unwrap().to_string();

        let (status, body) = app
            .post_empty(&format!("/approvals/weekly/{id}/approve"), &app.manager)
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "this weekly timesheet has already been processed");
    }
}
