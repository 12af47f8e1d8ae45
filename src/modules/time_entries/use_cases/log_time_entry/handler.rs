use crate::modules::projects::use_cases::list_projects::queries_port::ProjectQueries;
use crate::modules::time_entries::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::ports::{ProjectAvailability, WeekLedger};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::delete_time_entry::decide::decide_delete_time_entry;
use crate::modules::time_entries::use_cases::log_time_entry::command::{EntrySpan, LogTimeEntry};
use crate::modules::time_entries::use_cases::log_time_entry::decide::decide_log_time_entry;
use crate::modules::timers::core::ports::{TimeEntryLogger, TimerEntryOutcome};
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

pub fn time_entry_stream_id(time_entry_id: &str) -> String {
    format!("TimeEntry-{time_entry_id}")
}

pub async fn load_time_entry(
    event_store: &dyn EventStore<TimeEntryEvent>,
    stream_id: &str,
) -> Result<(TimeEntryState, i64), ApplicationError> {
    let stream = event_store.load(stream_id).await?;
    Ok(stream.fold(TimeEntryState::None, evolve))
}

pub async fn project_availability(
    projects: &dyn ProjectQueries,
    project_id: &str,
) -> Result<ProjectAvailability, ApplicationError> {
    Ok(match projects.get(project_id).await? {
        None => ProjectAvailability::Missing,
        Some(project) if project.is_active => ProjectAvailability::Active,
        Some(_) => ProjectAvailability::Inactive,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedEntry {
    pub time_entry_id: String,
    pub duration_minutes: i64,
    pub weekly_timesheet_id: String,
}

pub struct LogTimeEntryHandler {
    topic: String,
    event_store: Arc<dyn EventStore<TimeEntryEvent>>,
    outbox: Arc<dyn DomainOutbox>,
    projects: Arc<dyn ProjectQueries>,
    ledger: Arc<dyn WeekLedger>,
}

impl LogTimeEntryHandler {
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<dyn EventStore<TimeEntryEvent>>,
        outbox: Arc<dyn DomainOutbox>,
        projects: Arc<dyn ProjectQueries>,
        ledger: Arc<dyn WeekLedger>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            projects,
            ledger,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: LogTimeEntry) -> Result<LoggedEntry, ApplicationError> {
        let stream_id = time_entry_stream_id(&command.time_entry_id);
        let (state, version) = load_time_entry(&*self.event_store, &stream_id).await?;
        let project = project_availability(&*self.projects, &command.project_id).await?;
        let week = self
            .ledger
            .open_week_for(&actor.user_id, command.span.date())
            .await?;

        match decide_log_time_entry(&state, actor, command, project, &week) {
            Decision::Accepted { events, intents } => {
                let logged = match events.first() {
                    Some(TimeEntryEvent::TimeEntryLoggedV1(e)) => LoggedEntry {
                        time_entry_id: e.time_entry_id.clone(),
                        duration_minutes: e.duration_minutes,
                        weekly_timesheet_id: e.weekly_timesheet_id.clone(),
                    },
                    _ => return Err(ApplicationError::Unexpected("no entry was logged".into())),
                };
                self.ledger
                    .attach_entry(&week.weekly_timesheet_id, &logged.time_entry_id, false)
                    .await?;
                if let Err(e) = self.event_store.append(&stream_id, version, &events).await {
                    error!(stream_id, error = %e, "append failed, releasing week slot");
                    self.ledger
                        .detach_entry(&week.weekly_timesheet_id, &logged.time_entry_id, true)
                        .await?;
                    return Err(e.into());
                }
                dispatch_intents(&*self.outbox, &stream_id, version, &self.topic, intents).await?;
                info!(
                    stream_id,
                    minutes = logged.duration_minutes,
                    week = %week.weekly_timesheet_id,
                    "time entry logged"
                );
                Ok(logged)
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "time entry rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}

#[async_trait]
impl TimeEntryLogger for LogTimeEntryHandler {
    async fn log_timer_entry(
        &self,
        actor: &Actor,
        project_id: &str,
        description: &str,
        started_at: i64,
        stopped_at: i64,
    ) -> Result<TimerEntryOutcome, ApplicationError> {
        let command = LogTimeEntry {
            time_entry_id: Uuid::now_v7().to_string(),
            project_id: project_id.to_string(),
            span: EntrySpan::Timer {
                started_at,
                stopped_at,
            },
            description: description.to_string(),
            logged_at: stopped_at,
        };
        match self.handle(actor, command).await {
            Ok(logged) => Ok(TimerEntryOutcome::Logged {
                time_entry_id: logged.time_entry_id,
                duration_minutes: logged.duration_minutes,
            }),
            Err(ApplicationError::Domain(reason) | ApplicationError::NotFound(reason)) => {
                Ok(TimerEntryOutcome::Discarded { reason })
            }
            Err(e) => Err(e),
        }
    }

    async fn withdraw_timer_entry(
        &self,
        actor: &Actor,
        time_entry_id: &str,
        withdrawn_at: i64,
    ) -> Result<(), ApplicationError> {
        let stream_id = time_entry_stream_id(time_entry_id);
        let (state, version) = load_time_entry(&*self.event_store, &stream_id).await?;
        let command = DeleteTimeEntry {
            time_entry_id: time_entry_id.to_string(),
            deleted_at: withdrawn_at,
        };
        match decide_delete_time_entry(&state, actor, command, None) {
            Decision::Accepted { events, .. } => {
                self.event_store.append(&stream_id, version, &events).await?;
                if let TimeEntryState::Logged(entry) = &state {
                    self.ledger
                        .detach_entry(&entry.weekly_timesheet_id, time_entry_id, true)
                        .await?;
                }
                warn!(stream_id, "timer entry withdrawn");
                Ok(())
            }
            Decision::Rejected { reason } => Err(ApplicationError::rejected(reason)),
        }
    }
}
