use crate::modules::timers::core::events::v1::timer_started::TimerStartedV1;

pub fn make_timer_started_v1_event(timer_id: &str, user_id: &str) -> TimerStartedV1 {
    TimerStartedV1 {
        timer_id: timer_id.to_string(),
        user_id: user_id.to_string(),
        project_id: "p-1".to_string(),
        description: "focus".to_string(),
        started_at: 1_736_154_000_000,
    }
}
