use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::projects::use_cases::list_projects::projection::ProjectRow;
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::modules::users::use_cases::list_users::projection::UserRow;
use crate::modules::users::use_cases::list_users::queries_port::UserFilter;
use crate::shared::core::actor::{Actor, Role};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{minutes_to_hours, paginate};
use crate::shared::core::status::EntryStatus;
use crate::shell::state::AppState;

const USERS_PER_PAGE: u64 = 20;
const RECENT_ENTRIES: usize = 10;

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    pub q: Option<String>,
    pub role: Option<Role>,
    pub page: Option<u64>,
}

#[derive(Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: UserRow,
    pub total_entries: usize,
    pub total_hours: f64,
    pub approved_entries: usize,
    pub pending_entries: usize,
    pub projects: Vec<ProjectRow>,
    pub recent_entries: Vec<TimeEntryRow>,
}

fn require_admin(actor: &Actor) -> Result<(), ApplicationError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::Forbidden(
            "only admins can manage users".into(),
        ))
    }
}

pub async fn list(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListUsersParams>,
) -> Result<impl IntoResponse, ApplicationError> {
    require_admin(&actor)?;
    let filter = UserFilter {
        q: params.q,
        role: params.role,
    };
    let users = state.user_queries.list(&filter).await?;
    Ok(Json(paginate(users, params.page, USERS_PER_PAGE)))
}

pub async fn get(
    State(state): State<AppState>,
    actor: Actor,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    require_admin(&actor)?;
    let Some(user) = state.user_queries.get(&user_id).await? else {
        return Err(ApplicationError::NotFound(format!("user {user_id}")));
    };
    let entries = state
        .time_entry_queries
        .list(&TimeEntryFilter {
            user_id: Some(user_id.clone()),
            ..TimeEntryFilter::default()
        })
        .await?;
    let count = |status: EntryStatus| entries.iter().filter(|e| e.status == status).count();
    let projects = state
        .project_queries
        .list(true)
        .await?
        .into_iter()
        .filter(|project| project.members.contains(&user_id))
        .collect();
    Ok(Json(UserDetail {
        total_entries: entries.len(),
        total_hours: minutes_to_hours(entries.iter().map(|e| e.duration_minutes).sum()),
        approved_entries: count(EntryStatus::Approved),
        pending_entries: count(EntryStatus::Pending),
        projects,
        recent_entries: state.time_entry_queries.recent_for_user(&user_id, RECENT_ENTRIES).await?,
        user,
    }))
}

pub async fn me(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, ApplicationError> {
    match state.user_queries.get(&actor.user_id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(ApplicationError::Unauthenticated),
    }
}

#[cfg(test)]
mod list_users_http_inbound_tests {
    use crate::shared::core::actor::Role;
    use crate::tests::fixtures::app::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn it_should_list_users_ordered_by_username_for_admins() {
        let app = TestApp::start().await;
        let (status, body) = app.get("/users", &app.admin).await;
        assert_eq!(status, StatusCode::OK);
        let usernames: Vec<&str> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|user| user["username"].as_str().unwrap())
            .collect();
        assert_eq!(usernames, vec!["testadmin", "testmanager", "testworker"]);
        assert_eq!(body["total_items"], 3);
    }

    #[tokio::test]
    async fn it_should_filter_by_query_and_role() {
        let app = TestApp::start().await;
        let (_, body) = app.get("/users?q=WORK", &app.admin).await;
        assert_eq!(body["total_items"], 1);
        let (_, body) = app.get("/users?role=MANAGER", &app.admin).await;
        assert_eq!(body["items"][0]["role"], Role::Manager.as_str());
    }

    #[tokio::test]
    async fn it_should_forbid_workers_from_listing_users() {
        let app = TestApp::start().await;
        let (status, body) = app.get("/users", &app.worker).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body["error"].as_str().unwrap().contains("only admins"));
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_user() {
        let app = TestApp::start().await;
        let (status, _) = app.get("/users/nobody", &app.admin).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_sum_up_a_users_work_and_memberships() {
        let app = TestApp::start().await;
        let project_id = app.create_project("Apollo").await;
        app.put(
            &format!("/projects/{project_id}/members"),
            &app.admin,
            json!({"member_ids": [app.worker.user_id]}),
        )
        .await;
        let approved = app
            .log_entry(&app.worker, &project_id, "2025-01-06", "09:00", "10:30")
            .await;
        for day in 7..=8 {
            app.clock.advance_minutes(1);
            app.log_entry(&app.worker, &project_id, &format!("2025-01-0{day}"), "09:00", "10:00")
                .await;
        }
        app.post_empty(&format!("/approvals/{approved}/approve"), &app.manager)
            .await;

        let (status, body) = app
            .get(&format!("/users/{}", app.worker.user_id), &app.admin)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "testworker");
        assert_eq!(body["total_entries"], 3);
        assert_eq!(body["total_hours"], 3.5);
        assert_eq!(body["approved_entries"], 1);
        assert_eq!(body["pending_entries"], 2);
        assert_eq!(body["projects"][0]["project_id"], project_id.as_str());
        let recent = body["recent_entries"].as_array().unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0]["date"], "2025-01-08");
    }

    #[tokio::test]
    async fn it_should_describe_the_caller() {
        let app = TestApp::start().await;
        let (status, body) = app.get("/me", &app.worker).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "testworker");
        assert_eq!(body["role"], "WORKER");
    }
}
