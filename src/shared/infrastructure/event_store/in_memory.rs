use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// Streams kept in memory with optimistic concurrency on append.
pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<HashMap<String, Vec<Event>>>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            is_offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Widens the window between the version check and the write so tests can
    /// race two appends against the same stream.
    pub fn set_delay_append_ms(&self, millis: u64) {
        self.delay_append_ms.store(millis, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        let guard = self.inner.read().await;
        let events = guard.get(stream_id).cloned().unwrap_or_default();
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            let actual = self
                .inner
                .read()
                .await
                .get(stream_id)
                .map(|events| events.len() as i64)
                .unwrap_or(0);
            if actual != expected_version {
                return Err(EventStoreError::VersionMismatch {
                    expected: expected_version,
                    actual,
                });
            }
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let entry = guard.entry(stream_id.to_string()).or_default();
        let actual = entry.len() as i64;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        entry.extend_from_slice(new_events);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_event_store_tests {
    use super::*;
    use crate::tests::fixtures::events::domain_event::DomainEvent;
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[tokio::test]
    async fn it_should_append_and_load_an_event() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        store
            .append("1", 0, &[DomainEvent { name: "test" }])
            .await
            .expect("expected to append to the event_store");
        let stream = store
            .load("1")
            .await
            .expect("expected to load from the event_store");
        assert_eq!(stream.version, 1);
        assert_eq!(stream.events, vec![DomainEvent { name: "test" }]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_an_unknown_stream_as_empty() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let stream = store.load("missing").await.unwrap();
        assert_eq!(stream.version, 0);
        assert!(stream.events.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_append_if_the_wrong_version_is_expected() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let result = store.append("1", 1, &[DomainEvent { name: "test" }]).await;
        match result {
            Err(EventStoreError::VersionMismatch { expected, actual }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            _ => panic!("expected VersionMismatch error"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let mut store = InMemoryEventStore::<DomainEvent>::new();
        store.toggle_offline();
        let result = store.load("1").await;
        assert!(matches!(result, Err(EventStoreError::Backend(message)) if message == "Event store offline"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_only_one_of_two_racing_appends_win() {
        let store = Arc::new(InMemoryEventStore::<DomainEvent>::new());
        store.set_delay_append_ms(10);
        let (first, second) = tokio::join!(
            store.append("1", 0, &[DomainEvent { name: "a" }]),
            store.append("1", 0, &[DomainEvent { name: "b" }])
        );
        assert!(first.is_ok() ^ second.is_ok());
        assert_eq!(store.load("1").await.unwrap().version, 1);
    }
}
