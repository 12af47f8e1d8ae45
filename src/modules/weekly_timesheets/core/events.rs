pub mod v1 {
    pub mod entry_attached;
    pub mod entry_detached;
    pub mod week_opened;
    pub mod weekly_timesheet_approved;
    pub mod weekly_timesheet_rejected;
    pub mod weekly_timesheet_submitted;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum WeeklyTimesheetEvent {
    WeekOpenedV1(v1::week_opened::WeekOpenedV1),
    EntryAttachedV1(v1::entry_attached::EntryAttachedV1),
    EntryDetachedV1(v1::entry_detached::EntryDetachedV1),
    WeeklyTimesheetSubmittedV1(v1::weekly_timesheet_submitted::WeeklyTimesheetSubmittedV1),
    WeeklyTimesheetApprovedV1(v1::weekly_timesheet_approved::WeeklyTimesheetApprovedV1),
    WeeklyTimesheetRejectedV1(v1::weekly_timesheet_rejected::WeeklyTimesheetRejectedV1),
}
