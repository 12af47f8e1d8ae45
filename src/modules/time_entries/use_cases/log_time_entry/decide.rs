use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_logged::TimeEntryLoggedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::ports::{ProjectAvailability, WeekSlot};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::log_time_entry::command::{EntrySpan, LogTimeEntry};
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use crate::shared::core::primitives::datetime_of_millis;
use crate::shared::core::status::WeekStatus;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entry already exists")]
    AlreadyExists,
    #[error("project not found")]
    ProjectNotFound,
    #[error("project is not active")]
    ProjectInactive,
    #[error("end time must be after start time")]
    EndBeforeStart,
    #[error("description is required")]
    BlankDescription,
    #[error("cannot add entries to a {0} week")]
    WeekLocked(WeekStatus),
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::ProjectNotFound => RejectionKind::NotFound,
            DecideError::ProjectInactive
            | DecideError::EndBeforeStart
            | DecideError::BlankDescription => RejectionKind::Invalid,
            DecideError::AlreadyExists | DecideError::WeekLocked(_) => RejectionKind::Conflict,
        }
    }
}

/// Timer entries only need the project to still exist; manual entries need
/// it active. Entries always land in the actor's own week for the span date.
pub fn decide_log_time_entry(
    state: &TimeEntryState,
    actor: &Actor,
    command: LogTimeEntry,
    project: ProjectAvailability,
    week: &WeekSlot,
) -> Decision<TimeEntryEvent, TimeEntryIntent, DecideError> {
    if !matches!(state, TimeEntryState::None) {
        return Decision::reject(DecideError::AlreadyExists);
    }
    match (project, &command.span) {
        (ProjectAvailability::Missing, _) => return Decision::reject(DecideError::ProjectNotFound),
        (ProjectAvailability::Inactive, EntrySpan::Manual { .. }) => {
            return Decision::reject(DecideError::ProjectInactive);
        }
        _ => {}
    }
    let Some(duration_minutes) = command.span.duration_minutes() else {
        return Decision::reject(DecideError::EndBeforeStart);
    };
    let description = match (command.description.trim(), &command.span) {
        ("", EntrySpan::Manual { .. }) => return Decision::reject(DecideError::BlankDescription),
        ("", EntrySpan::Timer { started_at, .. }) => format!(
            "Timer session: {}",
            datetime_of_millis(*started_at).format("%Y-%m-%d %H:%M")
        ),
        (text, _) => text.to_string(),
    };
    if !week.status.is_editable() {
        return Decision::reject(DecideError::WeekLocked(week.status));
    }

    let (started_at, ended_at) = command.span.bounds();
    let payload = TimeEntryLoggedV1 {
        time_entry_id: command.time_entry_id,
        user_id: actor.user_id.clone(),
        project_id: command.project_id,
        date: command.span.date(),
        started_at: Some(started_at),
        ended_at: Some(ended_at),
        duration_minutes,
        description,
        entry_type: command.span.entry_type(),
        weekly_timesheet_id: week.weekly_timesheet_id.clone(),
        logged_at: command.logged_at,
        logged_by: actor.user_id.clone(),
    };
    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntryLoggedV1(payload.clone())],
        intents: vec![TimeEntryIntent::PublishTimeEntryLogged { payload }],
    }
}

#[cfg(test)]
mod log_time_entry_decide_tests {
    use super::*;
    use crate::shared::core::primitives::millis_of;
    use crate::shared::core::status::EntryType;
    use crate::tests::fixtures::actors::worker;
    use crate::tests::fixtures::commands::time_entries::{LogTimeEntryBuilder, week_slot};
    use chrono::{NaiveDate, NaiveTime};
    use rstest::rstest;

    fn accepted_payload(decision: Decision<TimeEntryEvent, TimeEntryIntent, DecideError>) -> TimeEntryLoggedV1 {
        match decision {
            Decision::Accepted { mut events, .. } => match events.remove(0) {
                TimeEntryEvent::TimeEntryLoggedV1(e) => e,
                other => panic!("unexpected event {other:?}"),
            },
            Decision::Rejected { reason } => panic!("unexpected rejection: {reason}"),
        }
    }

    #[rstest]
    fn it_should_log_a_manual_entry_into_the_week() {
        let command = LogTimeEntryBuilder::new().times("09:00", "10:30").build();
        let week = week_slot(WeekStatus::Draft);
        let payload = accepted_payload(decide_log_time_entry(
            &TimeEntryState::None,
            &worker(),
            command,
            ProjectAvailability::Active,
            &week,
        ));
        assert_eq!(payload.duration_minutes, 90);
        assert_eq!(payload.entry_type, EntryType::Manual);
        assert_eq!(payload.user_id, worker().user_id);
        assert_eq!(payload.weekly_timesheet_id, week.weekly_timesheet_id);
    }

    #[rstest]
    fn it_should_default_the_description_of_a_timer_entry() {
        let started_at = millis_of(
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            NaiveTime::from_hms_opt(8, 15, 30).unwrap(),
        );
        let command = LogTimeEntryBuilder::new()
            .timer(started_at, started_at + 20_000)
            .description("  ")
            .build();
        let payload = accepted_payload(decide_log_time_entry(
            &TimeEntryState::None,
            &worker(),
            command,
            ProjectAvailability::Inactive,
            &week_slot(WeekStatus::Rejected),
        ));
        assert_eq!(payload.description, "Timer session: 2025-01-06 08:15");
        assert_eq!(payload.duration_minutes, 1);
        assert_eq!(payload.entry_type, EntryType::Timer);
    }

    #[rstest]
    #[case::reversed("10:00", "09:00", "work", ProjectAvailability::Active, WeekStatus::Draft, DecideError::EndBeforeStart)]
    #[case::blank("09:00", "10:00", " ", ProjectAvailability::Active, WeekStatus::Draft, DecideError::BlankDescription)]
    #[case::missing_project("09:00", "10:00", "work", ProjectAvailability::Missing, WeekStatus::Draft, DecideError::ProjectNotFound)]
    #[case::inactive_project("09:00", "10:00", "work", ProjectAvailability::Inactive, WeekStatus::Draft, DecideError::ProjectInactive)]
    #[case::submitted_week("09:00", "10:00", "work", ProjectAvailability::Active, WeekStatus::Submitted, DecideError::WeekLocked(WeekStatus::Submitted))]
    #[case::approved_week("09:00", "10:00", "work", ProjectAvailability::Active, WeekStatus::Approved, DecideError::WeekLocked(WeekStatus::Approved))]
    fn it_should_reject(
        #[case] start: &str,
        #[case] end: &str,
        #[case] description: &str,
        #[case] project: ProjectAvailability,
        #[case] week_status: WeekStatus,
        #[case] expected: DecideError,
    ) {
        let command = LogTimeEntryBuilder::new()
            .times(start, end)
            .description(description)
            .build();
        match decide_log_time_entry(&TimeEntryState::None, &worker(), command, project, &week_slot(week_status)) {
            Decision::Rejected { reason } => assert_eq!(reason, expected),
            Decision::Accepted { .. } => panic!("expected rejection"),
        }
    }

    #[rstest]
    fn it_should_name_the_locked_status() {
        assert_eq!(
            DecideError::WeekLocked(WeekStatus::Submitted).to_string(),
            "cannot add entries to a SUBMITTED week"
        );
    }
}
