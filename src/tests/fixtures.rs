// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod actors;
pub mod app;
pub mod builders;
pub mod doubles;

pub mod commands {
    pub mod time_entries;
    pub mod users;
}

pub mod events {
    pub mod domain_event;
    pub mod projects;
    pub mod time_entries;
    pub mod timers;
    pub mod users;
    pub mod weekly_timesheets;
}
