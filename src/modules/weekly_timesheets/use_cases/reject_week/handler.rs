use crate::modules::weekly_timesheets::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::identity::weekly_timesheet_stream_id;
use crate::modules::weekly_timesheets::core::ports::{EntryStatusMirror, mirror_status_changes};
use crate::modules::weekly_timesheets::use_cases::manage_week_entries::handler::load_week;
use crate::modules::weekly_timesheets::use_cases::reject_week::command::RejectWeek;
use crate::modules::weekly_timesheets::use_cases::reject_week::decide::decide_reject_week;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RejectWeekHandler {
    topic: String,
    event_store: Arc<dyn EventStore<WeeklyTimesheetEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    mirror: Arc<dyn EntryStatusMirror>,
}

impl RejectWeekHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<WeeklyTimesheetEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        mirror: Arc<dyn EntryStatusMirror>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            mirror,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: RejectWeek) -> Result<(), ApplicationError> {
        let stream_id = weekly_timesheet_stream_id(&command.weekly_timesheet_id);
        let (state, version) = load_week(&*self.event_store, &stream_id).await?;

        match decide_reject_week(&state, actor, command) {
            Decision::Accepted { events, intents } => {
                self.event_store.append(&stream_id, version, &events).await?;
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                let mirrored = mirror_status_changes(&*self.mirror, &events).await;
                info!(stream_id, mirrored, reviewer = %actor.username, "week rejected");
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "week rejection refused");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
