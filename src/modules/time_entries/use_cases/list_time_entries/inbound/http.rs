use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::paginate;
use crate::shared::core::status::EntryStatus;
use crate::shell::state::AppState;

const ENTRIES_PER_PAGE: u64 = 20;

#[derive(Debug, Default, Deserialize)]
pub struct ListTimeEntriesParams {
    pub status: Option<String>,
    pub project_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
}

#[derive(Serialize)]
pub struct TimeEntryDetail {
    #[serde(flatten)]
    pub entry: TimeEntryRow,
    pub can_edit: bool,
    pub can_approve: bool,
}

pub async fn list(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListTimeEntriesParams>,
) -> Result<impl IntoResponse, ApplicationError> {
    let status = params
        .status
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| raw.parse::<EntryStatus>())
        .transpose()
        .map_err(ApplicationError::Validation)?;
    let filter = TimeEntryFilter {
        user_id: actor.is_worker().then(|| actor.user_id.clone()),
        project_id: params.project_id.filter(|id| !id.is_empty()),
        status,
        date_from: params.date_from,
        date_to: params.date_to,
        weekly_timesheet_id: None,
    };
    let entries = state.time_entry_queries.list(&filter).await?;
    Ok(Json(paginate(entries, params.page, ENTRIES_PER_PAGE)))
}

pub async fn get(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let entry = state
        .time_entry_queries
        .get(&time_entry_id)
        .await?
        .filter(|entry| !actor.is_worker() || actor.owns(&entry.user_id))
        .ok_or_else(|| ApplicationError::NotFound(format!("time entry {time_entry_id}")))?;
    Ok(Json(TimeEntryDetail {
        can_edit: actor.is_admin() || actor.owns(&entry.user_id),
        can_approve: actor.is_manager_or_admin(),
        entry,
    }))
}

pub async fn pending(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApplicationError> {
    if !actor.is_manager_or_admin() {
        return Err(ApplicationError::Forbidden(
            "only managers can review time entries".into(),
        ));
    }
    let entries = state
        .time_entry_queries
        .list(&TimeEntryFilter::pending())
        .await?;
    Ok(Json(paginate(entries, params.page, ENTRIES_PER_PAGE)))
}
