// Drives the full router in-process, the way a client would over HTTP.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::core::actor::Actor;
use crate::shared::core::clock::FixedClock;
use crate::shell::auth::USER_ID_HEADER;
use crate::shell::config::Config;
use crate::shell::graphql::build_schema;
use crate::shell::http::router;
use crate::shell::seed::seed_demo_users;
use crate::shell::state::AppState;

pub struct TestApp {
    pub state: AppState,
    pub clock: Arc<FixedClock>,
    pub admin: Actor,
    pub manager: Actor,
    pub worker: Actor,
    router: Router,
}

impl TestApp {
    /// Boots on Wednesday 2025-01-08 10:00 with the demo users seeded.
    pub async fn start() -> Self {
        let clock = Arc::new(FixedClock::at(NaiveDate::from_ymd_opt(2025, 1, 8).unwrap(), 10, 0));
        let state = AppState::in_memory(&Config::default(), clock.clone());
        let mut seeded = seed_demo_users(&state).await.unwrap().into_iter();
        let (admin, manager, worker) = (
            seeded.next().unwrap(),
            seeded.next().unwrap(),
            seeded.next().unwrap(),
        );
        let router = router(state.clone(), build_schema(state.clone()), false);
        Self {
            state,
            clock,
            admin,
            manager,
            worker,
            router,
        }
    }

    async fn send(&self, method: Method, uri: &str, actor: Option<&Actor>, body: Option<String>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(actor) = actor {
            request = request.header(USER_ID_HEADER, actor.user_id.as_str());
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, actor: &Actor) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(actor), None).await
    }

    pub async fn post(&self, uri: &str, actor: &Actor, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(actor), Some(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, actor: &Actor, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(actor), Some(body.to_string())).await
    }

    pub async fn post_empty(&self, uri: &str, actor: &Actor) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(actor), None).await
    }

    pub async fn put(&self, uri: &str, actor: &Actor, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(actor), Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str, actor: &Actor) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(actor), None).await
    }

    pub async fn anonymous_get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn anonymous_post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, None, Some(body.to_string())).await
    }

    /// Creates an active project as the admin and returns its id.
    pub async fn create_project(&self, name: &str) -> String {
        let (status, body) = self.post("/projects", &self.admin, json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["project_id"].as_str().unwrap().to_string()
    }

    /// Logs a manual entry and returns its id.
    pub async fn log_entry(&self, actor: &Actor, project_id: &str, date: &str, start: &str, end: &str) -> String {
        let (status, body) = self
            .post(
                "/entries",
                actor,
                json!({
                    "project_id": project_id,
                    "date": date,
                    "start_time": start,
                    "end_time": end,
                    "description": "work"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["time_entry_id"].as_str().unwrap().to_string()
    }

    /// Registers a user as the admin and returns them as a caller.
    pub async fn register(&self, username: &str, role: &str) -> Actor {
        let (status, body) = self
            .post(
                "/users",
                &self.admin,
                json!({
                    "username": username,
                    "email": format!("{username}@example.com"),
                    "first_name": "Test",
                    "last_name": "User",
                    "role": role
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        Actor::new(body["user_id"].as_str().unwrap(), username, role.parse().unwrap())
    }
}
