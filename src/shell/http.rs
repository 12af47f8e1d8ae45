use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::modules::dashboard::use_cases::show_dashboard::inbound::http as dashboard_http;
use crate::modules::projects::use_cases::assign_project_members::inbound::http as assign_members_http;
use crate::modules::projects::use_cases::create_project::inbound::http as create_project_http;
use crate::modules::projects::use_cases::delete_project::inbound::http as delete_project_http;
use crate::modules::projects::use_cases::list_projects::inbound::http as list_projects_http;
use crate::modules::projects::use_cases::update_project::inbound::http as update_project_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_entry_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_entries_http;
use crate::modules::time_entries::use_cases::log_time_entry::inbound::http as log_entry_http;
use crate::modules::time_entries::use_cases::review_time_entry::inbound::http as review_entry_http;
use crate::modules::time_entries::use_cases::revise_time_entry::inbound::http as revise_entry_http;
use crate::modules::timers::use_cases::start_timer::inbound::http as start_timer_http;
use crate::modules::timers::use_cases::stop_timer::inbound::http as stop_timer_http;
use crate::modules::timers::use_cases::timer_status::inbound::http as timer_status_http;
use crate::modules::users::use_cases::change_user_activation::inbound::http as activation_http;
use crate::modules::users::use_cases::list_users::inbound::http as list_users_http;
use crate::modules::users::use_cases::register_user::inbound::http as register_user_http;
use crate::modules::users::use_cases::update_user_profile::inbound::http as update_profile_http;
use crate::modules::weekly_timesheets::use_cases::approve_week::inbound::http as approve_week_http;
use crate::modules::weekly_timesheets::use_cases::reject_week::inbound::http as reject_week_http;
use crate::modules::weekly_timesheets::use_cases::submit_week::inbound::http as submit_week_http;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::inbound::http as view_week_http;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::graphql::{AppSchema, graphiql, graphql};
use crate::shell::state::AppState;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApplicationError::Unauthenticated => (StatusCode::UNAUTHORIZED, "not authenticated".to_string()),
            ApplicationError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            ApplicationError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApplicationError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApplicationError::Domain(message) => (StatusCode::CONFLICT, message),
            ApplicationError::VersionConflict(e @ EventStoreError::VersionMismatch { .. }) => {
                (StatusCode::CONFLICT, e.to_string())
            }
            other => {
                error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState, schema: AppSchema, enable_graphiql: bool) -> Router {
    let gql = if enable_graphiql {
        get(graphiql).post(graphql)
    } else {
        post(graphql)
    };

    Router::new()
        .route("/health", get(health))
        .route("/me", get(list_users_http::me))
        .route("/users", get(list_users_http::list).post(register_user_http::handle))
        .route("/users/{id}", get(list_users_http::get))
        .route("/users/{id}/profile", put(update_profile_http::handle))
        .route("/users/{id}/deactivate", post(activation_http::deactivate))
        .route("/users/{id}/activate", post(activation_http::activate))
        .route(
            "/projects",
            get(list_projects_http::list).post(create_project_http::handle),
        )
        .route(
            "/projects/{id}",
            get(list_projects_http::get)
                .put(update_project_http::handle)
                .delete(delete_project_http::handle),
        )
        .route("/projects/{id}/members", put(assign_members_http::handle))
        .route("/entries", get(list_entries_http::list).post(log_entry_http::handle))
        .route(
            "/entries/{id}",
            get(list_entries_http::get)
                .put(revise_entry_http::handle)
                .delete(delete_entry_http::handle),
        )
        .route("/timer/start", post(start_timer_http::handle))
        .route("/timer/stop/{timer_id}", post(stop_timer_http::handle))
        .route("/timer/status", get(timer_status_http::handle))
        .route("/approvals", get(list_entries_http::pending))
        .route("/approvals/{id}/approve", post(review_entry_http::approve))
        .route("/approvals/{id}/reject", post(review_entry_http::reject))
        .route("/approvals/weekly", get(view_week_http::pending))
        .route("/approvals/weekly/{id}", get(view_week_http::review_detail))
        .route("/approvals/weekly/{id}/approve", post(approve_week_http::handle))
        .route("/approvals/weekly/{id}/reject", post(reject_week_http::handle))
        .route("/weekly/{week_start}", get(view_week_http::get))
        .route("/weekly/{week_start}/submit", post(submit_week_http::handle))
        .route("/dashboard", get(dashboard_http::handle))
        .route("/gql", gql)
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
