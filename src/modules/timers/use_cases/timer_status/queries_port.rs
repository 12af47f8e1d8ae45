use crate::modules::timers::use_cases::timer_status::projection::RunningTimerRow;
use async_trait::async_trait;

#[async_trait]
pub trait TimerQueries: Send + Sync {
    async fn running_for(&self, user_id: &str) -> anyhow::Result<Option<RunningTimerRow>>;
}
