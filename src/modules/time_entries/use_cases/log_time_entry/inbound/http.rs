use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::time_entries::use_cases::log_time_entry::command::{EntrySpan, LogTimeEntry};
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TimeEntryBody {
    pub project_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub struct LogTimeEntryResponse {
    pub time_entry_id: String,
    pub duration_minutes: i64,
    pub weekly_timesheet_id: String,
}

/// Parses a wall clock time given as `HH:MM`.
pub fn parse_clock_time(field: &str, raw: &str) -> Result<NaiveTime, ApplicationError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| ApplicationError::Validation(format!("{field} must be in HH:MM format")))
}

impl TimeEntryBody {
    pub fn span(&self) -> Result<EntrySpan, ApplicationError> {
        Ok(EntrySpan::Manual {
            date: self.date,
            start: parse_clock_time("start_time", &self.start_time)?,
            end: parse_clock_time("end_time", &self.end_time)?,
        })
    }
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<TimeEntryBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(body) = body.map_err(|e| ApplicationError::Validation(e.body_text()))?;
    let command = LogTimeEntry {
        time_entry_id: Uuid::now_v7().to_string(),
        span: body.span()?,
        project_id: body.project_id,
        description: body.description,
        logged_at: state.clock.now_millis(),
    };
    let logged = state.log_time_entry.handle(&actor, command).await?;
    Ok((
        StatusCode::CREATED,
        Json(LogTimeEntryResponse {
            time_entry_id: logged.time_entry_id,
            duration_minutes: logged.duration_minutes,
            weekly_timesheet_id: logged.weekly_timesheet_id,
        }),
    ))
}

#[cfg(test)]
mod log_time_entry_http_inbound_tests {
    use crate::tests::fixtures::app::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    fn body(project_id: &str, date: &str, start: &str, end: &str) -> serde_json::Value {
        json!({
            "project_id": project_id,
            "date": date,
            "start_time": start,
            "end_time": end,
            "description": "Wiring"
        })
    }

    #[tokio::test]
    async fn it_should_return_201_and_open_the_week() {
        let app = TestApp::start().await;
        let project_id = app.create_project("Apollo").await;
        let (status, created) = app
            .post("/entries", &app.worker, body(&project_id, "2025-01-07", "08:30", "12:00"))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["duration_minutes"], 210);

        let (_, week) = app.get("/weekly/2025-01-06", &app.worker).await;
        assert_eq!(week["timesheet"]["status"], "DRAFT");
        assert_eq!(week["timesheet"]["weekly_timesheet_id"], created["weekly_timesheet_id"]);
        assert_eq!(week["timesheet"]["entry_count"], 1);
    }

    #[tokio::test]
    async fn it_should_return_422_when_end_is_not_after_start() {
        let app = TestApp::start().await;
        let project_id = app.create_project("Apollo").await;
        let (status, body) = app
            .post("/entries", &app.worker, body(&project_id, "2025-01-07", "12:00", "08:30"))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "end time must be after start time");
    }

    #[tokio::test]
    async fn it_should_return_422_for_a_malformed_time() {
        let app = TestApp::start().await;
        let project_id = app.create_project("Apollo").await;
        let (status, _) = app
            .post("/entries", &app.worker, body(&project_id, "2025-01-07", "8h", "12:00"))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_project() {
        let app = TestApp::start().await;
        let (status, _) = app
            .post("/entries", &app.worker, body("nope", "2025-01-07", "08:00", "09:00"))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
