use crate::modules::weekly_timesheets::core::events::v1::weekly_timesheet_approved::WeeklyTimesheetApprovedV1;
use crate::modules::weekly_timesheets::core::events::v1::weekly_timesheet_rejected::WeeklyTimesheetRejectedV1;
use crate::modules::weekly_timesheets::core::events::v1::weekly_timesheet_submitted::WeeklyTimesheetSubmittedV1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeeklyTimesheetIntent {
    PublishWeekSubmitted { payload: WeeklyTimesheetSubmittedV1 },
    PublishWeekApproved { payload: WeeklyTimesheetApprovedV1 },
    PublishWeekRejected { payload: WeeklyTimesheetRejectedV1 },
}
