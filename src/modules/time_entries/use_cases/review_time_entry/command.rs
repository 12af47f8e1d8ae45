#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Approve,
    Reject { reason: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTimeEntry {
    pub time_entry_id: String,
    pub verdict: Verdict,
    pub reviewed_at: i64,
}
