use crate::modules::weekly_timesheets::core::intents::WeeklyTimesheetIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

pub async fn dispatch_intents(
    outbox: &dyn DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<WeeklyTimesheetIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let row = match intent {
            WeeklyTimesheetIntent::PublishWeekSubmitted { payload } => OutboxRow::v1(
                topic,
                "WeeklyTimesheetSubmitted",
                stream_id,
                stream_version,
                payload.submitted_at,
                &payload,
            )?,
            WeeklyTimesheetIntent::PublishWeekApproved { payload } => OutboxRow::v1(
                topic,
                "WeeklyTimesheetApproved",
                stream_id,
                stream_version,
                payload.approved_at,
                &payload,
            )?,
            WeeklyTimesheetIntent::PublishWeekRejected { payload } => OutboxRow::v1(
                topic,
                "WeeklyTimesheetRejected",
                stream_id,
                stream_version,
                payload.rejected_at,
                &payload,
            )?,
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}
