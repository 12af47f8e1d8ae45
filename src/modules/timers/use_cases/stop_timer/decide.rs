use crate::modules::timers::core::events::TimerEvent;
use crate::modules::timers::core::events::v1::timer_stopped::TimerStoppedV1;
use crate::modules::timers::core::intents::TimerIntent;
use crate::modules::timers::core::ports::TimerEntryOutcome;
use crate::modules::timers::core::state::{TimerSession, TimerState};
use crate::modules::timers::use_cases::stop_timer::command::StopTimer;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("timer is not running")]
    NotRunning,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        RejectionKind::Conflict
    }
}

/// The actor's running session, provided it is the one being stopped.
pub fn running_session<'a>(state: &'a TimerState, timer_id: &str) -> Result<&'a TimerSession, DecideError> {
    match state {
        TimerState::Running(session) if session.timer_id == timer_id => Ok(session),
        _ => Err(DecideError::NotRunning),
    }
}

/// The session stops whatever happened to its entry.
pub fn decide_stop_timer(
    state: &TimerState,
    command: StopTimer,
) -> Decision<TimerEvent, TimerIntent, DecideError> {
    let session = match running_session(state, &command.timer_id) {
        Ok(session) => session,
        Err(reason) => return Decision::reject(reason),
    };
    let (time_entry_id, discarded_reason) = match command.outcome {
        TimerEntryOutcome::Logged { time_entry_id, .. } => (Some(time_entry_id), None),
        TimerEntryOutcome::Discarded { reason } => (None, Some(reason)),
    };
    let stopped = TimerStoppedV1 {
        timer_id: command.timer_id,
        user_id: session.user_id.clone(),
        stopped_at: command.stopped_at,
        time_entry_id,
        discarded_reason,
    };
    Decision::Accepted {
        events: vec![TimerEvent::TimerStoppedV1(stopped.clone())],
        intents: vec![TimerIntent::PublishTimerStopped { payload: stopped }],
    }
}
