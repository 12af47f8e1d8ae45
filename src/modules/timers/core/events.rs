pub mod v1 {
    pub mod timer_started;
    pub mod timer_stopped;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimerEvent {
    TimerStartedV1(v1::timer_started::TimerStartedV1),
    TimerStoppedV1(v1::timer_stopped::TimerStoppedV1),
}
