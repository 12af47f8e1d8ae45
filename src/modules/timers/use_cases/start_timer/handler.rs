use crate::modules::projects::use_cases::list_projects::queries_port::ProjectQueries;
use crate::modules::time_entries::use_cases::log_time_entry::handler::project_availability;
use crate::modules::timers::core::events::TimerEvent;
use crate::modules::timers::core::evolve::evolve;
use crate::modules::timers::core::state::TimerState;
use crate::modules::timers::use_cases::start_timer::command::StartTimer;
use crate::modules::timers::use_cases::start_timer::decide::decide_start_timer;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use tracing::{info, warn};

pub fn timer_stream_id(user_id: &str) -> String {
    format!("Timer-{user_id}")
}

pub async fn load_timer(
    event_store: &dyn EventStore<TimerEvent>,
    stream_id: &str,
) -> Result<(TimerState, i64), ApplicationError> {
    let stream = event_store.load(stream_id).await?;
    Ok(stream.fold(TimerState::Idle, evolve))
}

pub struct StartTimerHandler {
    event_store: Arc<dyn EventStore<TimerEvent>>,
    projects: Arc<dyn ProjectQueries>,
}

impl StartTimerHandler {
    pub fn new(event_store: Arc<dyn EventStore<TimerEvent>>, projects: Arc<dyn ProjectQueries>) -> Self {
        Self {
            event_store,
            projects,
        }
    }

    pub async fn handle(&self, actor: &Actor, command: StartTimer) -> Result<String, ApplicationError> {
        let stream_id = timer_stream_id(&actor.user_id);
        let (state, version) = load_timer(&*self.event_store, &stream_id).await?;
        let project = project_availability(&*self.projects, &command.project_id).await?;
        let timer_id = command.timer_id.clone();

        match decide_start_timer(&state, actor, command, project) {
            Decision::Accepted { events, .. } => {
                self.event_store.append(&stream_id, version, &events).await?;
                info!(stream_id, timer_id, "timer started");
                Ok(timer_id)
            }
            Decision::Rejected { reason } => {
                warn!(stream_id, %reason, "timer start rejected");
                Err(ApplicationError::rejected(reason))
            }
        }
    }
}
