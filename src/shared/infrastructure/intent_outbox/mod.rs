use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value as Json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct OutboxRow {
    pub topic: String,
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    pub stream_version: i64,
    pub occurred_at: i64,
    pub payload: Json,
}

impl OutboxRow {
    /// Builds a v1 row, serializing `payload` to JSON.
    pub fn v1(
        topic: &str,
        event_type: &str,
        stream_id: &str,
        stream_version: i64,
        occurred_at: i64,
        payload: &impl Serialize,
    ) -> Result<Self, OutboxError> {
        let payload = serde_json::to_value(payload)
            .map_err(|error| OutboxError::Validation(error.to_string()))?;
        Ok(Self {
            topic: topic.to_string(),
            event_type: event_type.to_string(),
            event_version: 1,
            stream_id: stream_id.to_string(),
            stream_version,
            occurred_at,
            payload,
        })
    }
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row for stream {stream_id} v{stream_version}")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("transient backend error: {0}")]
    Transient(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

pub mod in_memory;
