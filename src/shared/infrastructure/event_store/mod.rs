use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Events of one stream in append order. `version` is the number of events,
/// 0 for a stream nobody wrote to yet.
#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: i64,
}

impl<E> LoadedStream<E> {
    /// Replays the events through `evolve` and returns the state with the
    /// version to pass back as `expected_version` on the next append.
    pub fn fold<S>(self, initial: S, evolve: impl Fn(S, E) -> S) -> (S, i64) {
        let version = self.version;
        (self.events.into_iter().fold(initial, evolve), version)
    }
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;
    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;
}

pub mod in_memory;
pub mod projected;
