use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::events::v1::weekly_timesheet_rejected::WeeklyTimesheetRejectedV1;
use crate::modules::weekly_timesheets::core::intents::WeeklyTimesheetIntent;
use crate::modules::weekly_timesheets::core::state::WeeklyTimesheetState;
use crate::modules::weekly_timesheets::use_cases::approve_week::decide::{DecideError, guard_review};
use crate::modules::weekly_timesheets::use_cases::reject_week::command::RejectWeek;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;

pub fn decide_reject_week(
    state: &WeeklyTimesheetState,
    actor: &Actor,
    command: RejectWeek,
) -> Decision<WeeklyTimesheetEvent, WeeklyTimesheetIntent, DecideError> {
    let week = match guard_review(state, actor) {
        Ok(week) => week,
        Err(reason) => return Decision::reject(reason),
    };
    let reason = command.reason.trim();
    if reason.is_empty() {
        return Decision::reject(DecideError::ReasonRequired);
    }
    let rejected = WeeklyTimesheetRejectedV1 {
        weekly_timesheet_id: command.weekly_timesheet_id,
        user_id: week.user_id.clone(),
        entry_ids: week.entry_ids.clone(),
        rejected_by: actor.user_id.clone(),
        rejected_at: command.rejected_at,
        reason: reason.to_string(),
    };
    Decision::Accepted {
        events: vec![WeeklyTimesheetEvent::WeeklyTimesheetRejectedV1(rejected.clone())],
        intents: vec![WeeklyTimesheetIntent::PublishWeekRejected { payload: rejected }],
    }
}
