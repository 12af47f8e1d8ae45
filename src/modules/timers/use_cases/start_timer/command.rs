#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTimer {
    pub timer_id: String,
    pub project_id: String,
    pub description: String,
    pub started_at: i64,
}
