use crate::modules::timers::core::events::TimerEvent;
use crate::modules::timers::use_cases::timer_status::projection::RunningTimerRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Start(RunningTimerRow),
    Stop { user_id: String, timer_id: String },
}

pub fn apply(_stream_id: &str, _version: i64, event: &TimerEvent) -> Vec<Mutation> {
    match event {
        TimerEvent::TimerStartedV1(e) => vec![Mutation::Start(RunningTimerRow {
            timer_id: e.timer_id.clone(),
            user_id: e.user_id.clone(),
            project_id: e.project_id.clone(),
            description: e.description.clone(),
            started_at: e.started_at,
        })],
        TimerEvent::TimerStoppedV1(e) => vec![Mutation::Stop {
            user_id: e.user_id.clone(),
            timer_id: e.timer_id.clone(),
        }],
    }
}
