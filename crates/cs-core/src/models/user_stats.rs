use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate store statistics for the admin surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: usize,
    pub guests: usize,
    pub hosts: usize,
    /// Newest signups first, at most five entries.
    pub most_recent: Vec<RecentSignup>,
}

/// Stripped entry in [`UserStats::most_recent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentSignup {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
