use crate::modules::timers::core::events::TimerEvent;
use crate::modules::timers::core::state::{TimerSession, TimerState};

pub fn evolve(state: TimerState, event: TimerEvent) -> TimerState {
    match (state, event) {
        (TimerState::Idle, TimerEvent::TimerStartedV1(e)) => TimerState::Running(TimerSession {
            timer_id: e.timer_id,
            user_id: e.user_id,
            project_id: e.project_id,
            description: e.description,
            started_at: e.started_at,
        }),
        (TimerState::Running(session), TimerEvent::TimerStoppedV1(e)) if session.timer_id == e.timer_id => {
            TimerState::Idle
        }
        (state, _) => state,
    }
}
