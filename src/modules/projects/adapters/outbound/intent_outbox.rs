use crate::modules::projects::core::intents::ProjectIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

pub async fn dispatch_intents(
    outbox: &dyn DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<ProjectIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let row = match intent {
            ProjectIntent::PublishProjectCreated { payload } => OutboxRow::v1(
                topic,
                "ProjectCreated",
                stream_id,
                stream_version,
                payload.created_at,
                &payload,
            )?,
            ProjectIntent::PublishProjectDeleted { payload } => OutboxRow::v1(
                topic,
                "ProjectDeleted",
                stream_id,
                stream_version,
                payload.deleted_at,
                &payload,
            )?,
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}
