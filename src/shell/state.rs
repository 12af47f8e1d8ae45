use crate::modules::projects::core::events::ProjectEvent;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::timers::core::events::TimerEvent;
use crate::modules::users::core::events::UserEvent;
use crate::modules::weekly_timesheets::core::events::WeeklyTimesheetEvent;
use crate::modules::projects::adapters::outbound::projections_in_memory::InMemoryProjectProjections;
use crate::modules::projects::use_cases::assign_project_members::handler::AssignProjectMembersHandler;
use crate::modules::projects::use_cases::create_project::handler::CreateProjectHandler;
use crate::modules::projects::use_cases::delete_project::handler::DeleteProjectHandler;
use crate::modules::projects::use_cases::list_projects::queries_port::ProjectQueries;
use crate::modules::projects::use_cases::update_project::handler::UpdateProjectHandler;
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryTimeEntryProjections;
use crate::modules::time_entries::core::ports::WeekLedger;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::log_time_entry::handler::LogTimeEntryHandler;
use crate::modules::time_entries::use_cases::mirror_week_status::handler::MirrorWeekStatusHandler;
use crate::modules::time_entries::use_cases::review_time_entry::handler::ReviewTimeEntryHandler;
use crate::modules::time_entries::use_cases::revise_time_entry::handler::ReviseTimeEntryHandler;
use crate::modules::timers::adapters::outbound::projections_in_memory::InMemoryTimerProjections;
use crate::modules::timers::use_cases::start_timer::handler::StartTimerHandler;
use crate::modules::timers::use_cases::stop_timer::handler::StopTimerHandler;
use crate::modules::timers::use_cases::timer_status::queries_port::TimerQueries;
use crate::modules::users::adapters::outbound::projections_in_memory::InMemoryUserProjections;
use crate::modules::users::use_cases::change_user_activation::handler::ChangeUserActivationHandler;
use crate::modules::users::use_cases::list_users::queries_port::UserQueries;
use crate::modules::users::use_cases::register_user::handler::RegisterUserHandler;
use crate::modules::users::use_cases::update_user_profile::handler::UpdateUserProfileHandler;
use crate::modules::weekly_timesheets::adapters::outbound::projections_in_memory::InMemoryWeeklyTimesheetProjections;
use crate::modules::weekly_timesheets::use_cases::approve_week::handler::ApproveWeekHandler;
use crate::modules::weekly_timesheets::use_cases::manage_week_entries::handler::WeekLedgerHandler;
use crate::modules::weekly_timesheets::use_cases::reject_week::handler::RejectWeekHandler;
use crate::modules::weekly_timesheets::use_cases::submit_week::handler::SubmitWeekHandler;
use crate::modules::weekly_timesheets::use_cases::view_weekly_timesheet::queries_port::WeeklyTimesheetQueries;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::event_store::projected::ProjectedEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shared::infrastructure::projection::Projector;
use crate::shell::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub outbox: Arc<InMemoryDomainOutbox>,

    pub register_user: Arc<RegisterUserHandler>,
    pub update_user_profile: Arc<UpdateUserProfileHandler>,
    pub change_user_activation: Arc<ChangeUserActivationHandler>,
    pub user_queries: Arc<dyn UserQueries>,

    pub create_project: Arc<CreateProjectHandler>,
    pub update_project: Arc<UpdateProjectHandler>,
    pub delete_project: Arc<DeleteProjectHandler>,
    pub assign_project_members: Arc<AssignProjectMembersHandler>,
    pub project_queries: Arc<dyn ProjectQueries>,

    pub log_time_entry: Arc<LogTimeEntryHandler>,
    pub revise_time_entry: Arc<ReviseTimeEntryHandler>,
    pub delete_time_entry: Arc<DeleteTimeEntryHandler>,
    pub review_time_entry: Arc<ReviewTimeEntryHandler>,
    pub time_entry_queries: Arc<dyn TimeEntryQueries>,

    pub start_timer: Arc<StartTimerHandler>,
    pub stop_timer: Arc<StopTimerHandler>,
    pub timer_queries: Arc<dyn TimerQueries>,

    pub week_ledger: Arc<dyn WeekLedger>,
    pub submit_week: Arc<SubmitWeekHandler>,
    pub approve_week: Arc<ApproveWeekHandler>,
    pub reject_week: Arc<RejectWeekHandler>,
    pub weekly_queries: Arc<dyn WeeklyTimesheetQueries>,
}

fn projected<E: Clone + Send + Sync + 'static>(projector: Arc<dyn Projector<E>>) -> Arc<dyn EventStore<E>> {
    Arc::new(ProjectedEventStore::<E>::new(Arc::new(InMemoryEventStore::<E>::new())).with_projector(projector))
}

impl AppState {
    /// Wires every handler over in-memory streams, with read models kept in
    /// step by projecting each append.
    pub fn in_memory(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let topic = config.outbox_topic.as_str();
        let outbox = Arc::new(InMemoryDomainOutbox::new());

        let users = Arc::new(InMemoryUserProjections::new());
        let user_store = projected::<UserEvent>(users.clone());

        let projects = Arc::new(InMemoryProjectProjections::new());
        let project_store = projected::<ProjectEvent>(projects.clone());

        let entries = Arc::new(InMemoryTimeEntryProjections::new());
        let entry_store = projected::<TimeEntryEvent>(entries.clone());

        let timers = Arc::new(InMemoryTimerProjections::new());
        let timer_store = projected::<TimerEvent>(timers.clone());

        let weeks = Arc::new(InMemoryWeeklyTimesheetProjections::new());
        let week_store = projected::<WeeklyTimesheetEvent>(weeks.clone());

        let week_ledger: Arc<dyn WeekLedger> = Arc::new(WeekLedgerHandler::new(week_store.clone(), clock.clone()));
        let mirror = Arc::new(MirrorWeekStatusHandler::new(entry_store.clone()));
        let log_time_entry = Arc::new(LogTimeEntryHandler::new(
            topic,
            entry_store.clone(),
            outbox.clone(),
            projects.clone(),
            week_ledger.clone(),
        ));

        Self {
            clock,
            register_user: Arc::new(RegisterUserHandler::new(
                topic,
                user_store.clone(),
                outbox.clone(),
                users.clone(),
            )),
            update_user_profile: Arc::new(UpdateUserProfileHandler::new(user_store.clone())),
            change_user_activation: Arc::new(ChangeUserActivationHandler::new(topic, user_store, outbox.clone())),
            user_queries: users.clone(),

            create_project: Arc::new(CreateProjectHandler::new(topic, project_store.clone(), outbox.clone())),
            update_project: Arc::new(UpdateProjectHandler::new(project_store.clone())),
            delete_project: Arc::new(DeleteProjectHandler::new(
                topic,
                project_store.clone(),
                outbox.clone(),
                entries.clone(),
            )),
            assign_project_members: Arc::new(AssignProjectMembersHandler::new(project_store, users)),
            project_queries: projects.clone(),

            revise_time_entry: Arc::new(ReviseTimeEntryHandler::new(
                entry_store.clone(),
                projects.clone(),
                week_ledger.clone(),
            )),
            delete_time_entry: Arc::new(DeleteTimeEntryHandler::new(entry_store.clone(), week_ledger.clone())),
            review_time_entry: Arc::new(ReviewTimeEntryHandler::new(topic, entry_store, outbox.clone())),
            time_entry_queries: entries,

            start_timer: Arc::new(StartTimerHandler::new(timer_store.clone(), projects)),
            stop_timer: Arc::new(StopTimerHandler::new(
                topic,
                timer_store,
                outbox.clone(),
                log_time_entry.clone(),
            )),
            timer_queries: timers,
            log_time_entry,

            week_ledger,
            submit_week: Arc::new(SubmitWeekHandler::new(
                topic,
                week_store.clone(),
                outbox.clone(),
                mirror.clone(),
            )),
            approve_week: Arc::new(ApproveWeekHandler::new(
                topic,
                week_store.clone(),
                outbox.clone(),
                mirror.clone(),
            )),
            reject_week: Arc::new(RejectWeekHandler::new(topic, week_store, outbox.clone(), mirror)),
            weekly_queries: weeks,
            outbox,
        }
    }
}
