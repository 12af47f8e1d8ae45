#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeUserActivation {
    pub user_id: String,
    pub is_active: bool,
    pub changed_at: i64,
}
