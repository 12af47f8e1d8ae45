use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::dashboard::use_cases::show_dashboard::view::{Dashboard, RECENT_ENTRIES};
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::modules::timers::use_cases::timer_status::inbound::http::timer_status_for;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{minutes_to_hours, week_bounds};
use crate::shell::state::AppState;

/// Workers see their own week, managers and admins the whole team's.
pub async fn dashboard_for(state: &AppState, actor: &Actor) -> Result<Dashboard, ApplicationError> {
    let today = state.clock.today();
    let (week_start, week_end) = week_bounds(today);

    let week_filter = TimeEntryFilter {
        user_id: actor.is_worker().then(|| actor.user_id.clone()),
        date_from: Some(week_start),
        date_to: Some(week_end),
        ..TimeEntryFilter::default()
    };
    let week_minutes: i64 = state
        .time_entry_queries
        .list(&week_filter)
        .await?
        .iter()
        .map(|entry| entry.duration_minutes)
        .sum();

    let (pending_approvals_count, pending_weekly_approvals_count) = if actor.is_manager_or_admin() {
        (
            state.time_entry_queries.list(&TimeEntryFilter::pending()).await?.len(),
            state.weekly_queries.list_submitted().await?.len(),
        )
    } else {
        (0, 0)
    };

    let current_week = if actor.is_worker() {
        let slot = state.week_ledger.open_week_for(&actor.user_id, today).await?;
        state.weekly_queries.get(&slot.weekly_timesheet_id).await?
    } else {
        None
    };

    Ok(Dashboard {
        week_start,
        week_end,
        running_timer: timer_status_for(state, actor).await?,
        total_hours_week: minutes_to_hours(week_minutes),
        recent_entries: state
            .time_entry_queries
            .recent_for_user(&actor.user_id, RECENT_ENTRIES)
            .await?,
        pending_approvals_count,
        pending_weekly_approvals_count,
        active_projects_count: state.project_queries.count_active().await?,
        current_week,
    })
}

pub async fn handle(State(state): State<AppState>, actor: Actor) -> Result<impl IntoResponse, ApplicationError> {
    Ok(Json(dashboard_for(&state, &actor).await?))
}
