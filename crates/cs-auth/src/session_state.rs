use cs_core::UserProfile;

/// Where the running process stands with respect to a logged-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Process start; the persisted snapshot has not been reconciled yet.
    Restoring,
    /// No logged-in user.
    Unauthenticated,
    /// The active session, holding the snapshot as persisted.
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
