use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::status::WeekStatus;
use async_trait::async_trait;
use tracing::error;

/// A week landed in a new status; its entries follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStatusChange {
    pub weekly_timesheet_id: String,
    pub status: WeekStatus,
    pub entry_ids: Vec<String>,
    pub changed_by: String,
    pub changed_at: i64,
    pub rejection_reason: Option<String>,
}

#[async_trait]
pub trait EntryStatusMirror: Send + Sync {
    /// Returns how many entries changed.
    async fn mirror_week_status(&self, change: &WeekStatusChange) -> Result<usize, ApplicationError>;
}

impl WeekStatusChange {
    /// The change a status event implies for the week's entries, if any.
    pub fn from_event(event: &WeeklyTimesheetEvent) -> Option<Self> {
        match event {
            WeeklyTimesheetEvent::WeeklyTimesheetSubmittedV1(e) => Some(Self {
                weekly_timesheet_id: e.weekly_timesheet_id.clone(),
                status: WeekStatus::Submitted,
                entry_ids: e.entry_ids.clone(),
                changed_by: e.user_id.clone(),
                changed_at: e.submitted_at,
                rejection_reason: None,
            }),
            WeeklyTimesheetEvent::WeeklyTimesheetApprovedV1(e) => Some(Self {
                weekly_timesheet_id: e.weekly_timesheet_id.clone(),
                status: WeekStatus::Approved,
                entry_ids: e.entry_ids.clone(),
                changed_by: e.approved_by.clone(),
                changed_at: e.approved_at,
                rejection_reason: None,
            }),
            WeeklyTimesheetEvent::WeeklyTimesheetRejectedV1(e) => Some(Self {
                weekly_timesheet_id: e.weekly_timesheet_id.clone(),
                status: WeekStatus::Rejected,
                entry_ids: e.entry_ids.clone(),
                changed_by: e.rejected_by.clone(),
                changed_at: e.rejected_at,
                rejection_reason: Some(e.reason.clone()),
            }),
            _ => None,
        }
    }
}

/// Hands every status change among `events` to the mirror. Runs after the
/// week event is committed, so mirror failures are logged, not returned.
pub async fn mirror_status_changes(mirror: &dyn EntryStatusMirror, events: &[WeeklyTimesheetEvent]) -> usize {
    let mut mirrored = 0;
    for change in events.iter().filter_map(WeekStatusChange::from_event) {
        match mirror.mirror_week_status(&change).await {
            Ok(count) => mirrored += count,
            Err(e) => error!(
                week = %change.weekly_timesheet_id,
                status = %change.status,
                error = %e,
                "entries did not follow their week"
            ),
        }
    }
    mirrored
}
