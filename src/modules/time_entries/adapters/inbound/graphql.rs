use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::time_entries::use_cases::list_time_entries::projection::TimeEntryRow;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryFilter;
use crate::modules::time_entries::use_cases::log_time_entry::command::{EntrySpan, LogTimeEntry};
use crate::modules::time_entries::use_cases::log_time_entry::inbound::http::parse_clock_time;
use crate::modules::time_entries::use_cases::review_time_entry::command::{ReviewTimeEntry, Verdict};
use crate::shared::core::status::EntryStatus;
use crate::shell::graphql::request_actor;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub time_entry_id: ID,
    pub user_id: String,
    pub project_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub duration_hours: f64,
    pub description: String,
    pub entry_type: String,
    pub status: String,
    pub weekly_timesheet_id: String,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<TimeEntryRow> for GqlTimeEntry {
    fn from(row: TimeEntryRow) -> Self {
        Self {
            time_entry_id: ID(row.time_entry_id),
            user_id: row.user_id,
            project_id: row.project_id,
            date: row.date,
            duration_minutes: row.duration_minutes,
            duration_hours: row.duration_hours,
            description: row.description,
            entry_type: row.entry_type.as_str().to_string(),
            status: row.status.to_string(),
            weekly_timesheet_id: row.weekly_timesheet_id,
            approved_by: row.approved_by,
            rejection_reason: row.rejection_reason,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Default)]
pub struct TimeEntriesQuery;

#[Object]
impl TimeEntriesQuery {
    /// Workers only ever see their own entries.
    async fn time_entries(
        &self,
        context: &Context<'_>,
        status: Option<String>,
        project_id: Option<String>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let actor = request_actor(context)?;
        let filter = TimeEntryFilter {
            user_id: actor.is_worker().then(|| actor.user_id.clone()),
            project_id,
            status: status.map(|raw| raw.parse::<EntryStatus>()).transpose()?,
            date_from,
            date_to,
            weekly_timesheet_id: None,
        };
        let entries = state.time_entry_queries.list(&filter).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    async fn pending_time_entries(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        if !request_actor(context)?.is_manager_or_admin() {
            return Err("only managers can review time entries".into());
        }
        let entries = state
            .time_entry_queries
            .list(&TimeEntryFilter::pending())
            .await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}

#[derive(Default)]
pub struct TimeEntriesMutation;

#[Object]
impl TimeEntriesMutation {
    async fn log_time_entry(
        &self,
        context: &Context<'_>,
        project_id: String,
        date: NaiveDate,
        start_time: String,
        end_time: String,
        description: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let actor = request_actor(context)?;
        let command = LogTimeEntry {
            time_entry_id: Uuid::now_v7().to_string(),
            project_id,
            span: EntrySpan::Manual {
                date,
                start: parse_clock_time("start_time", &start_time)?,
                end: parse_clock_time("end_time", &end_time)?,
            },
            description,
            logged_at: state.clock.now_millis(),
        };
        let logged = state.log_time_entry.handle(actor, command).await?;
        Ok(ID(logged.time_entry_id))
    }

    async fn approve_time_entry(&self, context: &Context<'_>, time_entry_id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = ReviewTimeEntry {
            time_entry_id: time_entry_id.to_string(),
            verdict: Verdict::Approve,
            reviewed_at: state.clock.now_millis(),
        };
        state
            .review_time_entry
            .handle(request_actor(context)?, command)
            .await?;
        Ok(true)
    }

    async fn reject_time_entry(
        &self,
        context: &Context<'_>,
        time_entry_id: ID,
        reason: Option<String>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = ReviewTimeEntry {
            time_entry_id: time_entry_id.to_string(),
            verdict: Verdict::Reject { reason },
            reviewed_at: state.clock.now_millis(),
        };
        state
            .review_time_entry
            .handle(request_actor(context)?, command)
            .await?;
        Ok(true)
    }
}
