use crate::shared::core::primitives::millis_of;
use crate::tests::fixtures::app::TestApp;
use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveTime};
use serde_json::{Value, json};

fn revision(project_id: &str, date: &str, end_time: &str) -> Value {
    json!({
        "project_id": project_id,
        "date": date,
        "start_time": "09:00",
        "end_time": end_time,
        "description": "Adjusted"
    })
}

fn entry_statuses(view: &Value) -> Vec<String> {
    view["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["status"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn rejects_resubmits_and_approves_a_week() {
    let app = TestApp::start().await;
    let project_id = app.create_project("Apollo").await;
    let monday = app
        .log_entry(&app.worker, &project_id, "2025-01-06", "09:00", "12:00")
        .await;
    app.log_entry(&app.worker, &project_id, "2025-01-07", "13:00", "17:30")
        .await;

    let (status, body) = app.post_empty("/weekly/2025-01-06/submit", &app.worker).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "you can only submit a week after it has ended");

    app.clock.set(millis_of(
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ));
    let (status, body) = app
        .post("/weekly/2025-01-06/submit", &app.worker, json!({ "notes": "first try" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let week_id = body["weekly_timesheet_id"].as_str().unwrap().to_string();

    let (status, _) = app
        .put(&format!("/entries/{monday}"), &app.worker, revision(&project_id, "2025-01-06", "11:00"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, queue) = app.get("/approvals/weekly", &app.manager).await;
    assert_eq!(queue["total_items"], 1);
    assert_eq!(queue["items"][0]["weekly_timesheet_id"], week_id.as_str());
    assert_eq!(queue["items"][0]["username"], "testworker");
    assert_eq!(queue["items"][0]["total_hours"], 7.5);

    let (status, detail) = app
        .get(&format!("/approvals/weekly/{week_id}"), &app.manager)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["timesheet"]["status"], "SUBMITTED");
    assert_eq!(detail["entries"].as_array().unwrap().len(), 2);

    let (status, _) = app
        .post(
            &format!("/approvals/weekly/{week_id}/reject"),
            &app.manager,
            json!({ "reason": "Monday looks long" }),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, week) = app.get("/weekly/2025-01-06", &app.worker).await;
    assert_eq!(week["timesheet"]["status"], "REJECTED");
    assert_eq!(week["timesheet"]["rejection_reason"], "Monday looks long");
    assert_eq!(week["can_submit"], true);
    assert_eq!(entry_statuses(&week), vec!["REJECTED", "REJECTED"]);

    let (status, _) = app
        .put(&format!("/entries/{monday}"), &app.worker, revision(&project_id, "2025-01-06", "11:00"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .post("/weekly/2025-01-06/submit", &app.worker, json!({ "notes": "second try" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, week) = app.get("/weekly/2025-01-06", &app.worker).await;
    assert_eq!(week["timesheet"]["status"], "SUBMITTED");
    assert_eq!(week["timesheet"]["rejection_reason"], Value::Null);
    assert_eq!(week["timesheet"]["total_hours"], 6.5);
    assert_eq!(entry_statuses(&week), vec!["PENDING", "PENDING"]);

    let (status, _) = app
        .post_empty(&format!("/approvals/weekly/{week_id}/approve"), &app.manager)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, week) = app.get("/weekly/2025-01-06", &app.worker).await;
    assert_eq!(week["timesheet"]["status"], "APPROVED");
    assert_eq!(week["timesheet"]["approved_by"], app.manager.user_id.as_str());
    assert_eq!(week["can_submit"], false);
    assert_eq!(entry_statuses(&week), vec!["APPROVED", "APPROVED"]);

    let (_, queue) = app.get("/approvals/weekly", &app.manager).await;
    assert_eq!(queue["total_items"], 0);
}

#[tokio::test]
async fn keeps_an_approved_week_locked_except_for_admins() {
    let app = TestApp::start().await;
    let project_id = app.create_project("Apollo").await;
    let entry_id = app
        .log_entry(&app.worker, &project_id, "2025-01-06", "09:00", "10:00")
        .await;
    app.clock.set(millis_of(
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ));
    let (_, body) = app.post_empty("/weekly/2025-01-06/submit", &app.worker).await;
    let week_id = body["weekly_timesheet_id"].as_str().unwrap().to_string();
    app.post_empty(&format!("/approvals/weekly/{week_id}/approve"), &app.manager)
        .await;

    let uri = format!("/entries/{entry_id}");
    let (status, body) = app
        .put(&uri, &app.worker, revision(&project_id, "2025-01-06", "12:00"))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "cannot edit approved entries");
    let (status, _) = app.delete(&uri, &app.manager).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _) = app
        .post("/entries", &app.worker, json!({
            "project_id": project_id,
            "date": "2025-01-08",
            "start_time": "09:00",
            "end_time": "10:00",
            "description": "late addition"
        }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .put(&uri, &app.admin, revision(&project_id, "2025-01-06", "12:00"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, week) = app.get("/weekly/2025-01-06", &app.worker).await;
    assert_eq!(week["timesheet"]["total_hours"], 3.0);
    assert_eq!(week["timesheet"]["status"], "APPROVED");
}
