use async_trait::async_trait;

/// Folds one appended event into a read model. `version` is the 1-based
/// position of the event in its stream.
#[async_trait]
pub trait Projector<E>: Send + Sync {
    async fn project(&self, stream_id: &str, version: i64, event: &E) -> anyhow::Result<()>;
}
