#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSession {
    pub timer_id: String,
    pub user_id: String,
    pub project_id: String,
    pub description: String,
    pub started_at: i64,
}

/// One stream per user, so at most one session runs at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running(TimerSession),
}
