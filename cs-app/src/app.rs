//! Application wiring - the surface the rest of the marketplace consumes.

use crate::config::AppConfig;
use crate::error::Result as AppErrorResult;

use cs_auth::{SessionManager, SessionState};
use cs_core::{NewUser, UserProfile, UserStats, UserUpdate};
use cs_db::{KvStore, SqliteKvStore, UserStore};
use cs_mailer::{DispatchResult, Mailer};

use std::sync::Arc;

use uuid::Uuid;

/// The identity subsystem, fully wired: durable store, session manager,
/// and notification dispatcher behind one handle.
pub struct App {
    users: Arc<UserStore>,
    sessions: SessionManager,
    mailer: Mailer,
}

impl App {
    /// Open the durable store at the configured path and wire everything up.
    pub async fn open(config: &AppConfig) -> AppErrorResult<Self> {
        let kv: Arc<dyn KvStore> = Arc::new(SqliteKvStore::open(&config.database_path).await?);
        Self::with_store(kv, config).await
    }

    /// Wire the application over any storage backend. Tests inject
    /// [`cs_db::MemoryKvStore`] here.
    pub async fn with_store(kv: Arc<dyn KvStore>, config: &AppConfig) -> AppErrorResult<Self> {
        let users = Arc::new(UserStore::new(kv.clone()));
        users.initialize().await?;

        let sessions =
            SessionManager::new(users.clone(), kv).with_simulated_latency(config.auth_latency);
        let mailer = Mailer::new(config.mail.clone());

        Ok(Self {
            users,
            sessions,
            mailer,
        })
    }

    /// Reconcile the persisted session snapshot; run once at startup.
    pub async fn restore_session(&self) -> SessionState {
        self.sessions.restore().await
    }

    pub async fn login(&self, email: &str, password: &str) -> cs_auth::Result<UserProfile> {
        self.sessions.login(email, password).await
    }

    pub async fn register(&self, new_user: NewUser) -> cs_auth::Result<UserProfile> {
        self.sessions.register(new_user).await
    }

    pub async fn logout(&self) {
        self.sessions.logout().await
    }

    pub async fn update_profile(&self, update: UserUpdate) -> cs_auth::Result<UserProfile> {
        self.sessions.update_profile(update).await
    }

    pub async fn current_session(&self) -> Option<UserProfile> {
        self.sessions.current_session().await
    }

    /// Credential-stripped records for the admin listing.
    pub async fn list_users(&self) -> AppErrorResult<Vec<UserProfile>> {
        let users = self.users.list_all().await?;
        Ok(users.iter().map(|u| u.profile()).collect())
    }

    pub async fn stats(&self) -> AppErrorResult<UserStats> {
        Ok(self.users.stats().await?)
    }

    /// Admin-side removal. Does not touch the active session; a session
    /// belonging to the deleted user falls out at the next restoration.
    pub async fn delete_user(&self, id: Uuid) -> AppErrorResult<()> {
        Ok(self.users.delete(id).await?)
    }

    pub async fn send_password_reset(&self, email: &str) -> DispatchResult {
        self.mailer.send_password_reset(email).await
    }

    pub async fn send_verification_code(&self, email: &str) -> DispatchResult {
        self.mailer.send_verification_code(email).await
    }
}
