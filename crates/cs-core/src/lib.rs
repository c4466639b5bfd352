pub mod credential;
pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_profile::UserProfile;
pub use models::user_role::UserRole;
pub use models::user_stats::{RecentSignup, UserStats};
pub use models::user_update::UserUpdate;

#[cfg(test)]
mod tests;
