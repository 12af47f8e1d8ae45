use crate::modules::time_entries::use_cases::log_time_entry::command::EntrySpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviseTimeEntry {
    pub time_entry_id: String,
    pub project_id: String,
    pub span: EntrySpan,
    pub description: String,
    pub revised_at: i64,
}
