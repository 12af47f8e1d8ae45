use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;

use crate::modules::time_entries::adapters::inbound::graphql::GqlTimeEntry;
use crate::modules::weekly_timesheets::use_cases::approve_week::command::ApproveWeek;
use crate::modules::weekly_timesheets::use_cases::reject_week::command::RejectWeek;
use crate::modules::weekly_timesheets::use_cases::submit_week::command::SubmitWeek;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::inbound::http::{
    pending_weeks, view_of,
};
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::view::WeeklyTimesheetSummary;
use crate::shell::graphql::request_actor;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlWeeklyTimesheet {
    pub weekly_timesheet_id: ID,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub status: String,
    pub notes: String,
    pub submitted_at: Option<i64>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
    pub entry_count: usize,
    pub total_hours: f64,
}

impl From<WeeklyTimesheetSummary> for GqlWeeklyTimesheet {
    fn from(summary: WeeklyTimesheetSummary) -> Self {
        let row = summary.timesheet;
        Self {
            weekly_timesheet_id: ID(row.weekly_timesheet_id),
            user_id: row.user_id,
            week_start: row.week_start,
            week_end: row.week_end,
            status: row.status.to_string(),
            notes: row.notes,
            submitted_at: row.submitted_at,
            approved_by: row.approved_by,
            rejection_reason: row.rejection_reason,
            entry_count: summary.entry_count,
            total_hours: summary.total_hours,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlWeeklyTimesheetView {
    pub timesheet: GqlWeeklyTimesheet,
    pub entries: Vec<GqlTimeEntry>,
    pub can_submit: bool,
}

#[derive(Default)]
pub struct WeeklyTimesheetsQuery;

#[Object]
impl WeeklyTimesheetsQuery {
    /// The caller's own week, by its Monday.
    async fn weekly_timesheet(
        &self,
        context: &Context<'_>,
        week_start: NaiveDate,
    ) -> GqlResult<Option<GqlWeeklyTimesheetView>> {
        let state = context.data_unchecked::<AppState>();
        let actor = request_actor(context)?;
        let Some(timesheet) = state.weekly_queries.find(&actor.user_id, week_start).await? else {
            return Ok(None);
        };
        let view = view_of(state, timesheet).await?;
        Ok(Some(GqlWeeklyTimesheetView {
            timesheet: view.timesheet.into(),
            entries: view.entries.into_iter().map(Into::into).collect(),
            can_submit: view.can_submit,
        }))
    }

    async fn pending_weeks(&self, context: &Context<'_>, page: Option<u64>) -> GqlResult<Vec<GqlWeeklyTimesheet>> {
        let state = context.data_unchecked::<AppState>();
        let page = pending_weeks(state, request_actor(context)?, page).await?;
        Ok(page.items.into_iter().map(|week| week.summary.into()).collect())
    }
}

#[derive(Default)]
pub struct WeeklyTimesheetsMutation;

#[Object]
impl WeeklyTimesheetsMutation {
    async fn submit_week(
        &self,
        context: &Context<'_>,
        week_start: NaiveDate,
        #[graphql(default)] notes: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = SubmitWeek {
            week_start,
            notes: notes.trim().to_string(),
            submitted_at: state.clock.now_millis(),
        };
        let id = state.submit_week.handle(request_actor(context)?, command).await?;
        Ok(ID(id))
    }

    async fn approve_week(&self, context: &Context<'_>, weekly_timesheet_id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = ApproveWeek {
            weekly_timesheet_id: weekly_timesheet_id.to_string(),
            approved_at: state.clock.now_millis(),
        };
        state.approve_week.handle(request_actor(context)?, command).await?;
        Ok(true)
    }

    async fn reject_week(&self, context: &Context<'_>, weekly_timesheet_id: ID, reason: String) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = RejectWeek {
            weekly_timesheet_id: weekly_timesheet_id.to_string(),
            reason,
            rejected_at: state.clock.now_millis(),
        };
        state.reject_week.handle(request_actor(context)?, command).await?;
        Ok(true)
    }
}
