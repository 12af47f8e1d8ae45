use crate::modules::projects::use_cases::list_projects::queries_port::ProjectQueries;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::ports::WeekLedger;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::log_time_entry::handler::{
    load_time_entry, project_availability, time_entry_stream_id,
};
use crate::modules::time_entries::use_cases::revise_time_entry::command::ReviseTimeEntry;
use crate::modules::time_entries::use_cases::revise_time_entry::decide::{
    DecideError, decide_revise_time_entry, guard_entry_change,
};
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct ReviseTimeEntryHandler {
    event_store: Arc<dyn EventStore<TimeEntryEvent>>,
    projects: Arc<dyn ProjectQueries>,
    ledger: Arc<dyn WeekLedger>,
}

impl ReviseTimeEntryHandler {
    pub fn new(
        event_store: Arc<dyn EventStore<TimeEntryEvent>>,
        projects: Arc<dyn ProjectQueries>,
        ledger: Arc<dyn WeekLedger>,
    ) -> Self {
        Self {
            event_store,
            projects,
            ledger,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: ReviseTimeEntry) -> Result<(), ApplicationError> {
        let stream_id = time_entry_stream_id(&command.time_entry_id);
        let (state, version) = load_time_entry(&*self.event_store, &stream_id).await?;
        let TimeEntryState::Logged(entry) = &state else {
            return Err(ApplicationError::rejected(DecideError::NotFound));
        };
        let current_week = self.ledger.week_status(&entry.weekly_timesheet_id).await?;
        // Checked before the target week is opened so a refused edit leaves no trace.
        if let Err(reason) = guard_entry_change(&state, actor, "edit", current_week) {
            warn!(stream_id, %reason, "time entry revision rejected");
            return Err(ApplicationError::rejected(reason));
        }
        let project = project_availability(&*self.projects, &command.project_id).await?;
        let target = self
            .ledger
            .open_week_for(&entry.user_id, command.span.date())
            .await?;
        let previous_week = entry.weekly_timesheet_id.clone();
        let time_entry_id = entry.time_entry_id.clone();

        match decide_revise_time_entry(&state, actor, command, project, current_week, &target) {
            Decision::Accepted { events, .. } => {
                let moved = target.weekly_timesheet_id != previous_week;
                if moved {
                    self.ledger
                        .attach_entry(&target.weekly_timesheet_id, &time_entry_id, actor.is_admin())
                        .await?;
                }
                if let Err(e) = self.event_store.append(&stream_id, version, &events).await {
                    if moved {
                        error!(stream_id, error = %e, "append failed, releasing target week slot");
                        self.ledger
                            .detach_entry(&target.weekly_timesheet_id, &time_entry_id, true)
                            .await?;
                    }
                    return Err(e.into());
                }
                if moved {
                    // The revision is committed; the old week must let go even if it locked meanwhile.
                    self.ledger.detach_entry(&previous_week, &time_entry_id, true).await?;
                }
                info!(stream_id, moved, actor = %actor.username, "time entry revised");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "time entry revision rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
