use crate::modules::time_entries::core::events::v1::time_entry_logged::TimeEntryLoggedV1;
use crate::modules::time_entries::core::events::v1::time_entry_reviewed::TimeEntryReviewedV1;

/// Domain intents produced by the deciders as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryIntent {
    PublishTimeEntryLogged { payload: TimeEntryLoggedV1 },
    PublishTimeEntryReviewed { payload: TimeEntryReviewedV1 },
}
