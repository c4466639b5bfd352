//! Identity store - the durable user repository over the bucket port.

use crate::error::{Result as StoreErrorResult, StoreError};
use crate::kv::KvStore;

use cs_core::{NewUser, RecentSignup, User, UserProfile, UserRole, UserStats, UserUpdate, credential};

use std::sync::Arc;

use chrono::Utc;
use log::debug;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Bucket holding the serialized user collection.
pub const USERS_BUCKET: &str = "curbshare_users";

/// How many signups [`UserStore::stats`] reports as most recent.
const RECENT_SIGNUP_COUNT: usize = 5;

/// Single source of truth for user records.
///
/// Every mutation runs its whole load-check-write sequence under
/// `write_guard`, so the uniqueness check and the write that follows it
/// cannot interleave with another mutation's. Two concurrent registrations
/// for one email resolve to one success and one `DuplicateEmail`.
pub struct UserStore {
    kv: Arc<dyn KvStore>,
    write_guard: Mutex<()>,
}

impl UserStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            kv,
            write_guard: Mutex::new(()),
        }
    }

    /// Ensure the users bucket exists. Idempotent; safe on every start.
    pub async fn initialize(&self) -> StoreErrorResult<()> {
        let _guard = self.write_guard.lock().await;

        if self.kv.get(USERS_BUCKET).await?.is_none() {
            self.save_users(&[]).await?;
        }

        Ok(())
    }

    /// Full records, credential included. Admin/internal boundary only;
    /// strip with [`User::profile`] before records leave the application.
    pub async fn list_all(&self) -> StoreErrorResult<Vec<User>> {
        self.load_users().await
    }

    /// Case-insensitive email lookup.
    pub async fn find_by_email(&self, email: &str) -> StoreErrorResult<Option<User>> {
        let users = self.load_users().await?;
        Ok(users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreErrorResult<Option<User>> {
        let users = self.load_users().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Register a new account.
    pub async fn create(&self, new_user: NewUser) -> StoreErrorResult<UserProfile> {
        let _guard = self.write_guard.lock().await;

        let mut users = self.load_users().await?;
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&new_user.email))
        {
            return Err(StoreError::duplicate_email(new_user.email));
        }

        let user = User::new(
            new_user.name,
            new_user.email,
            credential::encode(&new_user.password),
            new_user.role.unwrap_or_default(),
        );
        let profile = user.profile();

        users.push(user);
        self.save_users(&users).await?;

        debug!("Created user {} ({})", profile.id, profile.email);
        Ok(profile)
    }

    /// Check a login attempt against the stored credential. Never mutates.
    pub async fn authenticate(&self, email: &str, password: &str) -> StoreErrorResult<UserProfile> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or_else(|| StoreError::user_not_found())?;

        if !credential::verify(password, &user.credential) {
            return Err(StoreError::invalid_credential());
        }

        Ok(user.profile())
    }

    /// Merge a partial update over an existing record and refresh
    /// `updated_at`.
    pub async fn update(&self, id: Uuid, update: UserUpdate) -> StoreErrorResult<UserProfile> {
        let _guard = self.write_guard.lock().await;

        let mut users = self.load_users().await?;

        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::user_not_found())?;

        // Email uniqueness holds across all records, updates included.
        if let Some(email) = &update.email {
            if users
                .iter()
                .any(|u| u.id != id && u.email.eq_ignore_ascii_case(email))
            {
                return Err(StoreError::duplicate_email(email.clone()));
            }
        }

        let user = &mut users[index];

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email.to_lowercase();
        }
        if let Some(password) = update.password {
            user.credential = credential::encode(&password);
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        user.updated_at = Utc::now();

        let profile = user.profile();
        self.save_users(&users).await?;

        debug!("Updated user {}", profile.id);
        Ok(profile)
    }

    /// Remove a record. Deliberately leaves any active session belonging to
    /// the id alone; a stale session falls out at the next restoration.
    pub async fn delete(&self, id: Uuid) -> StoreErrorResult<()> {
        let _guard = self.write_guard.lock().await;

        let mut users = self.load_users().await?;
        let before = users.len();
        users.retain(|u| u.id != id);

        if users.len() == before {
            return Err(StoreError::user_not_found());
        }

        self.save_users(&users).await?;

        debug!("Deleted user {}", id);
        Ok(())
    }

    /// Aggregate statistics for the admin dashboard.
    pub async fn stats(&self) -> StoreErrorResult<UserStats> {
        let users = self.load_users().await?;

        let total = users.len();
        let guests = users.iter().filter(|u| u.role == UserRole::Guest).count();
        let hosts = users.iter().filter(|u| u.role == UserRole::Host).count();

        // Stable sort: records sharing a timestamp keep store order.
        let mut by_recency: Vec<&User> = users.iter().collect();
        by_recency.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let most_recent = by_recency
            .into_iter()
            .take(RECENT_SIGNUP_COUNT)
            .map(|u| RecentSignup {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
                created_at: u.created_at,
            })
            .collect();

        Ok(UserStats {
            total,
            guests,
            hosts,
            most_recent,
        })
    }

    async fn load_users(&self) -> StoreErrorResult<Vec<User>> {
        match self.kv.get(USERS_BUCKET).await? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                StoreError::persistence(format!("users bucket holds invalid JSON: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    // A mutation that fails here has not touched durable state: the new
    // collection only exists in the caller's local buffer until the single
    // `put` succeeds.
    async fn save_users(&self, users: &[User]) -> StoreErrorResult<()> {
        let json = serde_json::to_string(users)
            .map_err(|e| StoreError::persistence(format!("failed to serialize users: {}", e)))?;
        self.kv.put(USERS_BUCKET, &json).await?;
        Ok(())
    }
}
