use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::projects::use_cases::list_projects::projection::ProjectRow;
use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{minutes_to_hours, paginate};
use crate::shared::core::status::EntryStatus;
use crate::shell::state::AppState;

const PROJECTS_PER_PAGE: u64 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsParams {
    pub page: Option<u64>,
}

#[derive(Serialize)]
pub struct ProjectDetail {
    pub project: ProjectRow,
    pub total_hours: f64,
    pub approved_hours: f64,
    pub entries: Vec<TimeEntryRow>,
}

pub async fn list(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListProjectsParams>,
) -> Result<impl IntoResponse, ApplicationError> {
    let projects = state
        .project_queries
        .list(actor.is_manager_or_admin())
        .await?;
    Ok(Json(paginate(projects, params.page, PROJECTS_PER_PAGE)))
}

pub async fn get(
    State(state): State<AppState>,
    _actor: Actor,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Some(project) = state.project_queries.get(&project_id).await? else {
        return Err(ApplicationError::NotFound(format!("project {project_id}")));
    };
    let entries = state
        .time_entry_queries
        .list(&TimeEntryFilter::for_project(&project_id))
        .await?;
    let total_minutes: i64 = entries.iter().map(|e| e.duration_minutes).sum();
    let approved_minutes: i64 = entries
        .iter()
        .filter(|e| e.status == EntryStatus::Approved)
        .map(|e| e.duration_minutes)
        .sum();
    Ok(Json(ProjectDetail {
        project,
        total_hours: minutes_to_hours(total_minutes),
        approved_hours: minutes_to_hours(approved_minutes),
        entries,
    }))
}
