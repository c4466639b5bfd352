use crate::UserRole;

/// Registration input.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to [`UserRole::Guest`] when absent.
    pub role: Option<UserRole>,
}
