pub mod v1 {
    pub mod time_entry_deleted;
    pub mod time_entry_logged;
    pub mod time_entry_reviewed;
    pub mod time_entry_revised;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeEntryEvent {
    TimeEntryLoggedV1(v1::time_entry_logged::TimeEntryLoggedV1),
    TimeEntryRevisedV1(v1::time_entry_revised::TimeEntryRevisedV1),
    TimeEntryReviewedV1(v1::time_entry_reviewed::TimeEntryReviewedV1),
    TimeEntryDeletedV1(v1::time_entry_deleted::TimeEntryDeletedV1),
}
