use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::revise_time_entry::decide::{DecideError, guard_entry_change};
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::status::WeekStatus;

pub fn decide_delete_time_entry(
    state: &TimeEntryState,
    actor: &Actor,
    command: DeleteTimeEntry,
    week_status: Option<WeekStatus>,
) -> Decision<TimeEntryEvent, TimeEntryIntent, DecideError> {
    match guard_entry_change(state, actor, "delete", week_status) {
        Ok(entry) => Decision::accept(vec![TimeEntryEvent::TimeEntryDeletedV1(TimeEntryDeletedV1 {
            time_entry_id: command.time_entry_id,
            user_id: entry.user_id.clone(),
            weekly_timesheet_id: entry.weekly_timesheet_id.clone(),
            deleted_at: command.deleted_at,
            deleted_by: actor.user_id.clone(),
        })]),
        Err(reason) => Decision::reject(reason),
    }
}
