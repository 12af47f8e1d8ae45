#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTimeEntry {
    pub time_entry_id: String,
    pub deleted_at: i64,
}
