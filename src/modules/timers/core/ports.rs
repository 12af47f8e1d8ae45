use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ApplicationError;
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TimerEntryOutcome {
    Logged {
        time_entry_id: String,
        duration_minutes: i64,
    },
    Discarded {
        reason: String,
    },
}

/// Turns a finished session into a time entry. Business refusals come back
/// as `Discarded`; only infrastructure failures are errors.
#[async_trait]
pub trait TimeEntryLogger: Send + Sync {
    async fn log_timer_entry(
        &self,
        actor: &Actor,
        project_id: &str,
        description: &str,
        started_at: i64,
        stopped_at: i64,
    ) -> Result<TimerEntryOutcome, ApplicationError>;

    /// Takes back an entry logged for a stop that did not go through.
    async fn withdraw_timer_entry(
        &self,
        actor: &Actor,
        time_entry_id: &str,
        withdrawn_at: i64,
    ) -> Result<(), ApplicationError>;
}
