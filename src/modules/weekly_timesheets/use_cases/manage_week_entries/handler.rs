use crate::modules::time_entries::core::ports::{WeekLedger, WeekSlot};
use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::weekly_timesheets::core::evolve::evolve;
use crate::modules::weekly_timesheets::core::identity::{weekly_timesheet_id, weekly_timesheet_stream_id};
use crate::modules::weekly_timesheets::core::intents::WeeklyTimesheetIntent;
use crate::modules::weekly_timesheets::core::state::WeeklyTimesheetState;
use crate::modules::weekly_timesheets::use_cases::manage_week_entries::decide::{
    DecideError, decide_attach_entry, decide_detach_entry, decide_open_week,
};
use crate::shared::core::clock::Clock;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::week_bounds;
use crate::shared::core::status::WeekStatus;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub async fn load_week(
    event_store: &dyn EventStore<WeeklyTimesheetEvent>,
    stream_id: &str,
) -> Result<(WeeklyTimesheetState, i64), ApplicationError> {
    let stream = event_store.load(stream_id).await?;
    Ok(stream.fold(WeeklyTimesheetState::None, evolve))
}

/// Owns the entry membership of weekly timesheets on behalf of the
/// time entry use cases.
pub struct WeekLedgerHandler {
    event_store: Arc<dyn EventStore<WeeklyTimesheetEvent>>,
    clock: Arc<dyn Clock>,
}

impl WeekLedgerHandler {
    pub fn new(event_store: Arc<dyn EventStore<WeeklyTimesheetEvent>>, clock: Arc<dyn Clock>) -> Self {
        Self { event_store, clock }
    }

    async fn apply(
        &self,
        stream_id: &str,
        version: i64,
        decision: Decision<WeeklyTimesheetEvent, WeeklyTimesheetIntent, DecideError>,
    ) -> Result<(), ApplicationError> {
        match decision {
            Decision::Accepted { events, .. } if events.is_empty() => Ok(()),
            Decision::Accepted { events, .. } => {
                self.event_store.append(stream_id, version, &events).await?;
                Ok(())
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "week membership change rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}

#[async_trait]
impl WeekLedger for WeekLedgerHandler {
    async fn open_week_for(&self, user_id: &str, date: NaiveDate) -> Result<WeekSlot, ApplicationError> {
        let (week_start, week_end) = week_bounds(date);
        let id = weekly_timesheet_id(user_id, week_start);
        let stream_id = weekly_timesheet_stream_id(&id);
        let (state, version) = load_week(&*self.event_store, &stream_id).await?;
        let decision = decide_open_week(&state, user_id, date, self.clock.now_millis());
        match self.apply(&stream_id, version, decision).await {
            Ok(()) => {}
            // Someone else opened it first; theirs is as good as ours.
            Err(ApplicationError::VersionConflict(EventStoreError::VersionMismatch { .. })) => {
                debug!(stream_id, "week opened concurrently");
            }
            Err(e) => return Err(e),
        }
        if version == 0 {
            info!(stream_id, user_id, %week_start, "week opened");
        }
        let status = self.week_status(&id).await?.unwrap_or_default();
        Ok(WeekSlot {
            weekly_timesheet_id: id,
            week_start,
            week_end,
            status,
        })
    }

    async fn week_status(&self, weekly_timesheet_id: &str) -> Result<Option<WeekStatus>, ApplicationError> {
        let stream_id = weekly_timesheet_stream_id(weekly_timesheet_id);
        Ok(match load_week(&*self.event_store, &stream_id).await?.0 {
            WeeklyTimesheetState::Open(week) => Some(week.status),
            WeeklyTimesheetState::None => None,
        })
    }

    async fn attach_entry(
        &self,
        weekly_timesheet_id: &str,
        time_entry_id: &str,
        override_lock: bool,
    ) -> Result<(), ApplicationError> {
        let stream_id = weekly_timesheet_stream_id(weekly_timesheet_id);
        let (state, version) = load_week(&*self.event_store, &stream_id).await?;
        let decision = decide_attach_entry(&state, time_entry_id, override_lock, self.clock.now_millis());
        self.apply(&stream_id, version, decision).await
    }

    async fn detach_entry(
        &self,
        weekly_timesheet_id: &str,
        time_entry_id: &str,
        override_lock: bool,
    ) -> Result<(), ApplicationError> {
        let stream_id = weekly_timesheet_stream_id(weekly_timesheet_id);
        let (state, version) = load_week(&*self.event_store, &stream_id).await?;
        let decision = decide_detach_entry(&state, time_entry_id, override_lock, self.clock.now_millis());
        self.apply(&stream_id, version, decision).await
    }
}

#[cfg(test)]
mod week_ledger_handler_tests {
    use super::*;
    use crate::shared::core::clock::FixedClock;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn ledger() -> (WeekLedgerHandler, Arc<InMemoryEventStore<WeeklyTimesheetEvent>>) {
        let store = Arc::new(InMemoryEventStore::new());
        let clock = Arc::new(FixedClock::new(1_000));
        (WeekLedgerHandler::new(store.clone(), clock), store)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_open_each_week_once(ledger: (WeekLedgerHandler, Arc<InMemoryEventStore<WeeklyTimesheetEvent>>)) {
        let (ledger, store) = ledger;
        let monday = ledger.open_week_for("u-1", date(6)).await.unwrap();
        let sunday = ledger.open_week_for("u-1", date(12)).await.unwrap();
        assert_eq!(monday, sunday);
        assert_eq!(monday.status, WeekStatus::Draft);
        let stream_id = weekly_timesheet_stream_id(&monday.weekly_timesheet_id);
        assert_eq!(store.load(&stream_id).await.unwrap().version, 1);

        let next = ledger.open_week_for("u-1", date(13)).await.unwrap();
        assert_ne!(next.weekly_timesheet_id, monday.weekly_timesheet_id);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_attach_and_detach_idempotently(
        ledger: (WeekLedgerHandler, Arc<InMemoryEventStore<WeeklyTimesheetEvent>>),
    ) {
        let (ledger, store) = ledger;
        let week = ledger.open_week_for("u-1", date(7)).await.unwrap();
        let id = week.weekly_timesheet_id.as_str();
        ledger.attach_entry(id, "te-1", false).await.unwrap();
        ledger.attach_entry(id, "te-1", false).await.unwrap();
        ledger.detach_entry(id, "te-1", false).await.unwrap();
        ledger.detach_entry(id, "te-1", false).await.unwrap();

        let stream_id = weekly_timesheet_stream_id(id);
        assert_eq!(store.load(&stream_id).await.unwrap().version, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_unknown_weeks(ledger: (WeekLedgerHandler, Arc<InMemoryEventStore<WeeklyTimesheetEvent>>)) {
        let (ledger, _) = ledger;
        assert_eq!(ledger.week_status("missing").await.unwrap(), None);
        let result = ledger.attach_entry("missing", "te-1", false).await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
