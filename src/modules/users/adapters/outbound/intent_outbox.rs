use crate::modules::users::core::intents::UserIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// `starting_version` is the stream version before the append; intent `i`
/// lands at `starting_version + i + 1`.
pub async fn dispatch_intents(
    outbox: &dyn DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<UserIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let row = match intent {
            UserIntent::PublishUserRegistered { payload } => OutboxRow::v1(
                topic,
                "UserRegistered",
                stream_id,
                stream_version,
                payload.registered_at,
                &payload,
            )?,
            UserIntent::PublishUserActivationChanged { payload } => OutboxRow::v1(
                topic,
                "UserActivationChanged",
                stream_id,
                stream_version,
                payload.changed_at,
                &payload,
            )?,
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}
