use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use crate::shared::infrastructure::projection::Projector;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

/// Wraps an event store and runs every registered projector over the events
/// of each successful append, so read models never lag behind the streams.
pub struct ProjectedEventStore<E: Clone + Send + Sync + 'static> {
    inner: Arc<dyn EventStore<E>>,
    projectors: Vec<Arc<dyn Projector<E>>>,
}

impl<E: Clone + Send + Sync + 'static> ProjectedEventStore<E> {
    pub fn new(inner: Arc<dyn EventStore<E>>) -> Self {
        Self {
            inner,
            projectors: Vec::new(),
        }
    }

    pub fn with_projector(mut self, projector: Arc<dyn Projector<E>>) -> Self {
        self.projectors.push(projector);
        self
    }
}

#[async_trait]
impl<E: Clone + Send + Sync + 'static> EventStore<E> for ProjectedEventStore<E> {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<E>, EventStoreError> {
        self.inner.load(stream_id).await
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[E],
    ) -> Result<(), EventStoreError> {
        self.inner
            .append(stream_id, expected_version, new_events)
            .await?;
        for (i, event) in new_events.iter().enumerate() {
            let version = expected_version + i as i64 + 1;
            for projector in &self.projectors {
                if let Err(e) = projector.project(stream_id, version, event).await {
                    error!(stream_id, version, error = %e, "projection failed");
                    return Err(EventStoreError::Backend(e.to_string()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod projected_event_store_tests {
    use super::*;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::tests::fixtures::events::domain_event::DomainEvent;
    use rstest::rstest;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingProjector {
        seen: Mutex<Vec<(String, i64, &'static str)>>,
        fail: bool,
    }

    #[async_trait]
    impl Projector<DomainEvent> for RecordingProjector {
        async fn project(
            &self,
            stream_id: &str,
            version: i64,
            event: &DomainEvent,
        ) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("Projections repository offline");
            }
            self.seen
                .lock()
                .await
                .push((stream_id.to_string(), version, event.name));
            Ok(())
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_project_appended_events_with_their_stream_versions() {
        let projector = Arc::new(RecordingProjector::default());
        let store = ProjectedEventStore::new(Arc::new(InMemoryEventStore::new()))
            .with_projector(projector.clone());
        store
            .append("s", 0, &[DomainEvent { name: "a" }])
            .await
            .unwrap();
        store
            .append(
                "s",
                1,
                &[DomainEvent { name: "b" }, DomainEvent { name: "c" }],
            )
            .await
            .unwrap();
        assert_eq!(
            *projector.seen.lock().await,
            vec![
                ("s".to_string(), 1, "a"),
                ("s".to_string(), 2, "b"),
                ("s".to_string(), 3, "c"),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_project_a_rejected_append() {
        let projector = Arc::new(RecordingProjector::default());
        let store = ProjectedEventStore::new(Arc::new(InMemoryEventStore::new()))
            .with_projector(projector.clone());
        let result = store.append("s", 4, &[DomainEvent { name: "a" }]).await;
        assert!(matches!(result, Err(EventStoreError::VersionMismatch { .. })));
        assert!(projector.seen.lock().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_projection_failures_as_backend_errors() {
        let projector = Arc::new(RecordingProjector {
            fail: true,
            ..Default::default()
        });
        let store = ProjectedEventStore::new(Arc::new(InMemoryEventStore::new()))
            .with_projector(projector);
        let result = store.append("s", 0, &[DomainEvent { name: "a" }]).await;
        assert!(
            matches!(result, Err(EventStoreError::Backend(message)) if message == "Projections repository offline")
        );
    }
}
