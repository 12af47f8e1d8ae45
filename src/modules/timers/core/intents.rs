use crate::modules::timers::core::events::v1::timer_stopped::TimerStoppedV1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerIntent {
    PublishTimerStopped { payload: TimerStoppedV1 },
}
