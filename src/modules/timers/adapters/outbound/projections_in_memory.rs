use crate::modules::timers::core::events::TimerEvent;
use crate::modules::timers::core::projections::{Mutation, apply};
use crate::modules::timers::use_cases::timer_status::projection::RunningTimerRow;
use crate::modules::timers::use_cases::timer_status::queries_port::TimerQueries;
use crate::shared::infrastructure::projection::Projector;
use anyhow::bail;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Running sessions keyed by user.
#[derive(Default)]
pub struct InMemoryTimerProjections {
    running: RwLock<HashMap<String, RunningTimerRow>>,
    is_offline: bool,
}

impl InMemoryTimerProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            bail!("Projections repository offline");
        }
        Ok(())
    }
}

#[async_trait]
impl Projector<TimerEvent> for InMemoryTimerProjections {
    async fn project(&self, stream_id: &str, version: i64, event: &TimerEvent) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut running = self.running.write().await;
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Start(row) => {
                    running.insert(row.user_id.clone(), row);
                }
                Mutation::Stop { user_id, timer_id } => {
                    if running.get(&user_id).is_some_and(|row| row.timer_id == timer_id) {
                        running.remove(&user_id);
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl TimerQueries for InMemoryTimerProjections {
    async fn running_for(&self, user_id: &str) -> anyhow::Result<Option<RunningTimerRow>> {
        self.ensure_online()?;
        Ok(self.running.read().await.get(user_id).cloned())
    }
}
