use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::modules::time_entries::use_cases::list_time_entries::inbound::http::PageParams;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::projection::WeeklyTimesheetRow;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::view::{
    WeeklyTimesheetSummary, WeeklyTimesheetView, assemble, summarize,
};
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{Page, paginate, parse_week_start};
use crate::shell::state::AppState;

const WEEKS_PER_PAGE: u64 = 20;

#[derive(Debug, Serialize)]
pub struct PendingWeek {
    #[serde(flatten)]
    pub summary: WeeklyTimesheetSummary,
    pub username: String,
}

pub async fn view_of(state: &AppState, timesheet: WeeklyTimesheetRow) -> Result<WeeklyTimesheetView, ApplicationError> {
    let entries = state
        .time_entry_queries
        .list(&TimeEntryFilter::for_week(&timesheet.weekly_timesheet_id))
        .await?;
    Ok(assemble(timesheet, entries))
}

pub async fn pending_weeks(
    state: &AppState,
    actor: &Actor,
    page: Option<u64>,
) -> Result<Page<PendingWeek>, ApplicationError> {
    if !actor.is_manager_or_admin() {
        return Err(ApplicationError::Forbidden(
            "only managers can review weekly timesheets".into(),
        ));
    }
    let submitted = state.weekly_queries.list_submitted().await?;
    let page = paginate(submitted, page, WEEKS_PER_PAGE);
    let mut details = HashMap::new();
    for timesheet in &page.items {
        let entries = state
            .time_entry_queries
            .list(&TimeEntryFilter::for_week(&timesheet.weekly_timesheet_id))
            .await?;
        let username = state
            .user_queries
            .get(&timesheet.user_id)
            .await?
            .map(|user| user.username)
            .unwrap_or_default();
        details.insert(timesheet.weekly_timesheet_id.clone(), (entries, username));
    }
    Ok(page.map(|timesheet| {
        let (entries, username) = details
            .remove(&timesheet.weekly_timesheet_id)
            .unwrap_or_default();
        PendingWeek {
            summary: summarize(timesheet, &entries),
            username,
        }
    }))
}

/// The caller's own week, by its Monday.
pub async fn get(
    State(state): State<AppState>,
    actor: Actor,
    Path(week_start): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    let week_start = parse_week_start(&week_start).map_err(ApplicationError::Validation)?;
    let timesheet = state
        .weekly_queries
        .find(&actor.user_id, week_start)
        .await?
        .ok_or_else(|| ApplicationError::NotFound(format!("no weekly timesheet for week of {week_start}")))?;
    Ok(Json(view_of(&state, timesheet).await?))
}

pub async fn review_detail(
    State(state): State<AppState>,
    actor: Actor,
    Path(weekly_timesheet_id): Path<String>,
) -> Result<impl IntoResponse, ApplicationError> {
    if !actor.is_manager_or_admin() {
        return Err(ApplicationError::Forbidden(
            "only managers can review weekly timesheets".into(),
        ));
    }
    let timesheet = state
        .weekly_queries
        .get(&weekly_timesheet_id)
        .await?
        .ok_or_else(|| ApplicationError::NotFound(format!("weekly timesheet {weekly_timesheet_id}")))?;
    Ok(Json(view_of(&state, timesheet).await?))
}

pub async fn pending(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(pending_weeks(&state, &actor, params.page).await?))
}
