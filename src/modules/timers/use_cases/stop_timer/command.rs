use crate::modules::timers::core::ports::TimerEntryOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimer {
    pub timer_id: String,
    pub stopped_at: i64,
    pub outcome: TimerEntryOutcome,
}
