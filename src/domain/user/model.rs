//! User snapshot

/// Read-only projection of a customer account. Only the active flag
/// matters to scheduling; profile data stays with the user system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnapshot {
    pub user_id: String,
    pub is_active: bool,
}
