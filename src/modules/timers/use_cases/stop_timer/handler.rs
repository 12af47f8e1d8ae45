use crate::modules::timers::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::timers::core::events::TimerEvent;
use crate::modules::timers::core::ports::{TimeEntryLogger, TimerEntryOutcome};
use crate::modules::timers::use_cases::start_timer::handler::{load_timer, timer_stream_id};
use crate::modules::timers::use_cases::stop_timer::command::StopTimer;
use crate::modules::timers::use_cases::stop_timer::decide::{decide_stop_timer, running_session};
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct StopTimerHandler {
    topic: String,
    event_store: Arc<dyn EventStore<TimerEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    entries: Arc<dyn TimeEntryLogger>,
}

impl StopTimerHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<TimerEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        entries: Arc<dyn TimeEntryLogger>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            entries,
        }
    }

    pub async fn handle(
        &self,
        actor: &Actor,
        timer_id: &str,
        stopped_at: i64,
    ) -> Result<TimerEntryOutcome, ApplicationError> {
        let stream_id = timer_stream_id(&actor.user_id);
        let (state, version) = load_timer(&*self.event_store, &stream_id).await?;
        let session = match running_session(&state, timer_id) {
            Ok(session) => session,
            Err(reason) => {
                warn!(stream_id, timer_id, %reason, "timer stop rejected");
                return Err(ApplicationError::rejected(reason));
            }
        };
        let outcome = self
            .entries
            .log_timer_entry(
                actor,
                &session.project_id,
                &session.description,
                session.started_at,
                stopped_at,
            )
            .await?;
        let command = StopTimer {
            timer_id: timer_id.to_string(),
            stopped_at,
            outcome: outcome.clone(),
        };

        match decide_stop_timer(&state, command) {
            Decision::Accepted { events, intents } => {
                if let Err(e) = self.event_store.append(&stream_id, version, &events).await {
                    // Another stop claimed the session; its entry is the one that counts.
                    if let TimerEntryOutcome::Logged { time_entry_id, .. } = &outcome {
                        error!(stream_id, timer_id, error = %e, "stop lost, withdrawing its entry");
                        self.entries
                            .withdraw_timer_entry(actor, time_entry_id, stopped_at)
                            .await?;
                    }
                    return Err(e.into());
                }
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                match &outcome {
                    TimerEntryOutcome::Logged { duration_minutes, .. } => {
                        info!(stream_id, timer_id, minutes = duration_minutes, "timer stopped")
                    }
                    TimerEntryOutcome::Discarded { reason } => {
                        warn!(stream_id, timer_id, %reason, "timer stopped without an entry")
                    }
                }
                Ok(outcome)
            }
            Decision::Rejected { reason } => Err(ApplicationError::rejected(reason)),
        }
    }
}
