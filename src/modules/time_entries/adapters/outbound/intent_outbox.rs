use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate domain intents into outbox rows and enqueue them.
/// `starting_version` is the stream version before the append; intent `i`
/// lands at `starting_version + i + 1`.
pub async fn dispatch_intents(
    outbox: &dyn DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<TimeEntryIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let row = match intent {
            TimeEntryIntent::PublishTimeEntryLogged { payload } => OutboxRow::v1(
                topic,
                "TimeEntryLogged",
                stream_id,
                stream_version,
                payload.logged_at,
                &payload,
            )?,
            TimeEntryIntent::PublishTimeEntryReviewed { payload } => OutboxRow::v1(
                topic,
                "TimeEntryReviewed",
                stream_id,
                stream_version,
                payload.recorded_at,
                &payload,
            )?,
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}
