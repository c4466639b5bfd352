use crate::UserRole;

/// Partial profile mutation merged over an existing record.
///
/// `id` and `created_at` are deliberately not expressible here, so no
/// caller can overwrite them.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}
