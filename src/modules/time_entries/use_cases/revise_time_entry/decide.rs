use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_revised::TimeEntryRevisedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::ports::{ProjectAvailability, WeekSlot};
use crate::modules::time_entries::core::state::{TimeEntry, TimeEntryState};
use crate::modules::time_entries::use_cases::revise_time_entry::command::ReviseTimeEntry;
use crate::shared::core::actor::Actor;
use crate::shared::core::decision::Decision;
use crate::shared::core::errors::{Rejection, RejectionKind};
use crate::shared::core::status::{EntryStatus, WeekStatus};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entry not found")]
    NotFound,
    #[error("you can only {0} your own time entries")]
    NotOwner(&'static str),
    #[error("cannot {0} approved entries")]
    ApprovedLocked(&'static str),
    #[error("cannot {0} entries in a {1} week")]
    WeekLocked(&'static str, WeekStatus),
    #[error("cannot add entries to a {0} week")]
    TargetWeekLocked(WeekStatus),
    #[error("project not found")]
    ProjectNotFound,
    #[error("project is not active")]
    ProjectInactive,
    #[error("end time must be after start time")]
    EndBeforeStart,
    #[error("description is required")]
    BlankDescription,
}

impl Rejection for DecideError {
    fn kind(&self) -> RejectionKind {
        match self {
            DecideError::NotFound | DecideError::ProjectNotFound => RejectionKind::NotFound,
            DecideError::NotOwner(_) => RejectionKind::Forbidden,
            DecideError::ApprovedLocked(_)
            | DecideError::WeekLocked(..)
            | DecideError::TargetWeekLocked(_) => RejectionKind::Conflict,
            DecideError::ProjectInactive
            | DecideError::EndBeforeStart
            | DecideError::BlankDescription => RejectionKind::Invalid,
        }
    }
}

/// Ownership and lock rules shared by revising and deleting an entry.
/// Workers touch only their own entries; approved entries and entries in a
/// week that is not editable are reserved to admins.
pub fn guard_entry_change<'a>(
    state: &'a TimeEntryState,
    actor: &Actor,
    verb: &'static str,
    week_status: Option<WeekStatus>,
) -> Result<&'a TimeEntry, DecideError> {
    let TimeEntryState::Logged(entry) = state else {
        return Err(DecideError::NotFound);
    };
    if actor.is_worker() && !actor.owns(&entry.user_id) {
        return Err(DecideError::NotOwner(verb));
    }
    if actor.is_admin() {
        return Ok(entry);
    }
    if entry.status == EntryStatus::Approved {
        return Err(DecideError::ApprovedLocked(verb));
    }
    match week_status {
        Some(status) if !status.is_editable() => Err(DecideError::WeekLocked(verb, status)),
        _ => Ok(entry),
    }
}

/// `target` is the owner's week for the revised date; it differs from the
/// current week when the date moves across a week boundary.
pub fn decide_revise_time_entry(
    state: &TimeEntryState,
    actor: &Actor,
    command: ReviseTimeEntry,
    project: ProjectAvailability,
    current_week: Option<WeekStatus>,
    target: &WeekSlot,
) -> Decision<TimeEntryEvent, TimeEntryIntent, DecideError> {
    let entry = match guard_entry_change(state, actor, "edit", current_week) {
        Ok(entry) => entry,
        Err(reason) => return Decision::reject(reason),
    };
    match project {
        ProjectAvailability::Missing => return Decision::reject(DecideError::ProjectNotFound),
        ProjectAvailability::Inactive if command.project_id != entry.project_id => {
            return Decision::reject(DecideError::ProjectInactive);
        }
        _ => {}
    }
    let Some(duration_minutes) = command.span.duration_minutes() else {
        return Decision::reject(DecideError::EndBeforeStart);
    };
    let description = command.description.trim();
    if description.is_empty() {
        return Decision::reject(DecideError::BlankDescription);
    }
    let moves_week = target.weekly_timesheet_id != entry.weekly_timesheet_id;
    if moves_week && !actor.is_admin() && !target.status.is_editable() {
        return Decision::reject(DecideError::TargetWeekLocked(target.status));
    }

    let (started_at, ended_at) = command.span.bounds();
    Decision::accept(vec![TimeEntryEvent::TimeEntryRevisedV1(TimeEntryRevisedV1 {
        time_entry_id: command.time_entry_id,
        project_id: command.project_id,
        date: command.span.date(),
        started_at: Some(started_at),
        ended_at: Some(ended_at),
        duration_minutes,
        description: description.to_string(),
        weekly_timesheet_id: target.weekly_timesheet_id.clone(),
        revised_at: command.revised_at,
        revised_by: actor.user_id.clone(),
    })])
}

#[cfg(test)]
mod revise_time_entry_decide_tests {
    use super::*;
    use crate::modules::time_entries::core::evolve::evolve;
    use crate::modules::time_entries::core::events::v1::time_entry_reviewed::TimeEntryReviewedV1;
    use crate::tests::fixtures::actors::{admin, manager, other_worker, worker};
    use crate::tests::fixtures::commands::time_entries::{ReviseTimeEntryBuilder, week_slot, week_slot_for};
    use crate::tests::fixtures::events::time_entries::make_time_entry_logged_v1_event;
    use rstest::{fixture, rstest};

    #[fixture]
    fn logged() -> TimeEntryState {
        evolve(
            TimeEntryState::None,
            TimeEntryEvent::TimeEntryLoggedV1(make_time_entry_logged_v1_event("te-1", &worker().user_id)),
        )
    }

    fn approved(state: TimeEntryState) -> TimeEntryState {
        evolve(
            state,
            TimeEntryEvent::TimeEntryReviewedV1(TimeEntryReviewedV1 {
                time_entry_id: "te-1".into(),
                status: EntryStatus::Approved,
                reviewed_by: Some("m".into()),
                reviewed_at: Some(1),
                rejection_reason: None,
                via_weekly_timesheet: None,
                recorded_at: 1,
            }),
        )
    }

    #[rstest]
    fn it_should_revise_the_owners_entry(logged: TimeEntryState) {
        let command = ReviseTimeEntryBuilder::new().times("13:00", "14:00").build();
        let decision = decide_revise_time_entry(
            &logged,
            &worker(),
            command,
            ProjectAvailability::Active,
            Some(WeekStatus::Draft),
            &week_slot(WeekStatus::Draft),
        );
        let Decision::Accepted { events, .. } = decision else {
            panic!("expected acceptance");
        };
        assert!(matches!(&events[0], TimeEntryEvent::TimeEntryRevisedV1(e) if e.duration_minutes == 60));
    }

    #[rstest]
    fn it_should_follow_the_date_into_another_week(logged: TimeEntryState) {
        let command = ReviseTimeEntryBuilder::new().date("2025-01-14").build();
        let target = week_slot_for("wk-2", "2025-01-13", WeekStatus::Draft);
        let Decision::Accepted { events, .. } = decide_revise_time_entry(
            &logged,
            &worker(),
            command,
            ProjectAvailability::Active,
            Some(WeekStatus::Draft),
            &target,
        ) else {
            panic!("expected acceptance");
        };
        assert!(matches!(&events[0], TimeEntryEvent::TimeEntryRevisedV1(e) if e.weekly_timesheet_id == "wk-2"));
    }

    #[rstest]
    #[case::other_worker(other_worker(), Some(WeekStatus::Draft), DecideError::NotOwner("edit"))]
    #[case::submitted_week(worker(), Some(WeekStatus::Submitted), DecideError::WeekLocked("edit", WeekStatus::Submitted))]
    #[case::manager_on_submitted_week(manager(), Some(WeekStatus::Submitted), DecideError::WeekLocked("edit", WeekStatus::Submitted))]
    fn it_should_reject(
        logged: TimeEntryState,
        #[case] actor: Actor,
        #[case] current_week: Option<WeekStatus>,
        #[case] expected: DecideError,
    ) {
        let command = ReviseTimeEntryBuilder::new().build();
        match decide_revise_time_entry(&logged, &actor, command, ProjectAvailability::Active, current_week, &week_slot(WeekStatus::Draft)) {
            Decision::Rejected { reason } => assert_eq!(reason, expected),
            Decision::Accepted { .. } => panic!("expected rejection"),
        }
    }

    #[rstest]
    fn it_should_lock_approved_entries_except_for_admins(logged: TimeEntryState) {
        let state = approved(logged);
        let attempt = |actor: &Actor| {
            decide_revise_time_entry(
                &state,
                actor,
                ReviseTimeEntryBuilder::new().build(),
                ProjectAvailability::Active,
                Some(WeekStatus::Approved),
                &week_slot(WeekStatus::Approved),
            )
        };
        match attempt(&worker()) {
            Decision::Rejected { reason } => {
                assert_eq!(reason.to_string(), "cannot edit approved entries")
            }
            Decision::Accepted { .. } => panic!("expected rejection"),
        }
        assert!(attempt(&admin()).is_accepted());
    }

    #[rstest]
    fn it_should_not_move_an_entry_into_a_locked_week(logged: TimeEntryState) {
        let command = ReviseTimeEntryBuilder::new().date("2025-01-14").build();
        let target = week_slot_for("wk-2", "2025-01-13", WeekStatus::Submitted);
        match decide_revise_time_entry(&logged, &worker(), command, ProjectAvailability::Active, Some(WeekStatus::Draft), &target) {
            Decision::Rejected { reason } => assert_eq!(reason, DecideError::TargetWeekLocked(WeekStatus::Submitted)),
            Decision::Accepted { .. } => panic!("expected rejection"),
        }
    }
}
