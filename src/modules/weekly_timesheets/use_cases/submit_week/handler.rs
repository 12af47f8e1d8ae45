use crate::modules::weekly_timesheets::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::identity::{weekly_timesheet_id, weekly_timesheet_stream_id};
use crate::modules::weekly_timesheets::core::ports::{EntryStatusMirror, mirror_status_changes};
use crate::modules::weekly_timesheets::use_cases::manage_week_entries::handler::load_week;
use crate::modules::weekly_timesheets::use_cases::submit_week::command::SubmitWeek;
use crate::modules::weekly_timesheets::use_cases::submit_week::decide::decide_submit_week;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub struct SubmitWeekHandler {
    topic: String,
    event_store: Arc<dyn EventStore<WeeklyTimesheetEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    mirror: Arc<dyn EntryStatusMirror>,
}

impl SubmitWeekHandler {
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

    /// Returns the id of the submitted week.
    pub async fn handle(&self, actor: &Actor, command: SubmitWeek) -> Result<String, ApplicationError> {
        let id = weekly_timesheet_id(&actor.user_id, command.week_start);
        let stream_id = weekly_timesheet_stream_id(&id);
        let (state, version) = load_week(&*self.event_store, &stream_id).await?;

        match decide_submit_week(&state, actor, command) {
            Decision::Accepted { events, intents } => {
                self.event_store.append(&stream_id, version, &events).await?;
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                let mirrored = mirror_status_changes(&*self.mirror, &events).await;
                info!(stream_id, mirrored, actor = %actor.username, "week submitted");
                Ok(id)
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "week submission rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}

#[cfg(test)]
mod submit_week_handler_tests {
    use super::*;
    use crate::modules::time_entries::core::ports::WeekLedger;
    use crate::modules::weekly_timesheets::use_cases::manage_week_entries::handler::WeekLedgerHandler;
    use crate::shared::core::clock::FixedClock;
    use crate::shared::core::primitives::millis_of;
    use crate::shared::core::status::WeekStatus;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::actors::worker;
    use crate::tests::fixtures::doubles::RecordingMirror;
    use chrono::{NaiveDate, NaiveTime};
    use rstest::rstest;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_submit_enqueue_and_mirror_pending() {
        let store = Arc::new(InMemoryEventStore::new());
        let ledger = WeekLedgerHandler::new(store.clone(), Arc::new(FixedClock::new(0)));
        let week = ledger.open_week_for(&worker().user_id, monday()).await.unwrap();
        ledger.attach_entry(&week.weekly_timesheet_id, "te-1", false).await.unwrap();

        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let mirror = Arc::new(RecordingMirror::default());
        let submitted_at = millis_of(NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(), NaiveTime::MIN);
        let id = SubmitWeekHandler::new("timesheets.v1", store.clone(), outbox.clone(), mirror.clone())
            .handle(
                &worker(),
                SubmitWeek {
                    week_start: monday(),
                    notes: String::new(),
                    submitted_at,
                },
            )
            .await
            .unwrap();

        assert_eq!(id, week.weekly_timesheet_id);
        assert_eq!(ledger.week_status(&id).await.unwrap(), Some(WeekStatus::Submitted));
        assert_eq!(outbox.event_types().await, vec!["WeeklyTimesheetSubmitted"]);
        let changes = mirror.changes().await;
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].status, WeekStatus::Submitted);
        assert_eq!(changes[0].entry_ids, vec!["te-1"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_find_a_week_that_was_never_opened() {
        let mirror = Arc::new(RecordingMirror::default());
        let result = SubmitWeekHandler::new(
            "timesheets.v1",
            Arc::new(InMemoryEventStore::new()),
            Arc::new(InMemoryDomainOutbox::new()),
            mirror.clone(),
        )
        .handle(
            &worker(),
            SubmitWeek {
                week_start: monday(),
                notes: String::new(),
                submitted_at: 0,
            },
        )
        .await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
        assert!(mirror.changes().await.is_empty());
    }
}
