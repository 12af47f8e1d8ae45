use crate::modules::timers::core::intents::TimerIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

pub async fn dispatch_intents(
    outbox: &dyn DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<TimerIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let row = match intent {
            TimerIntent::PublishTimerStopped { payload } => OutboxRow::v1(
                topic,
                "TimerStopped",
                stream_id,
                stream_version,
                payload.stopped_at,
                &payload,
            )?,
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}
