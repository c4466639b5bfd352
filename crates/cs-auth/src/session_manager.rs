//! Process-local session over the durable snapshot bucket.

use crate::error::{Result as SessionErrorResult, SessionError};
use crate::session_state::SessionState;

use cs_core::{NewUser, UserProfile, UserUpdate};
use cs_db::{KvStore, UserStore};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::sync::RwLock;

/// Bucket holding the serialized snapshot of the active session.
pub const SESSION_BUCKET: &str = "curbshare_session";

/// Holds the one logged-in identity of the running process and keeps it in
/// sync with the snapshot bucket. Nothing else writes the session.
pub struct SessionManager {
    users: Arc<UserStore>,
    kv: Arc<dyn KvStore>,
    state: RwLock<SessionState>,
    /// Minimum latency added to login/register, pacing the UI the way a
    /// remote call would. Zero disables it.
    simulated_latency: Duration,
}

impl SessionManager {
    pub fn new(users: Arc<UserStore>, kv: Arc<dyn KvStore>) -> Self {
        Self {
            users,
            kv,
            state: RwLock::new(SessionState::Restoring),
            simulated_latency: Duration::ZERO,
        }
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Reconcile the persisted snapshot against the identity store.
    ///
    /// Always lands in Authenticated or Unauthenticated. A missing,
    /// malformed, or stale snapshot (and any storage error on the way)
    /// degrades to Unauthenticated; snapshots that are beyond repair are
    /// deleted.
    pub async fn restore(&self) -> SessionState {
        let next = self.reconcile_snapshot().await;
        *self.state.write().await = next.clone();
        next
    }

    async fn reconcile_snapshot(&self) -> SessionState {
        let raw = match self.kv.get(SESSION_BUCKET).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read session snapshot: {}", e);
                return SessionState::Unauthenticated;
            }
        };

        let Some(json) = raw else {
            return SessionState::Unauthenticated;
        };

        let snapshot: UserProfile = match serde_json::from_str(&json) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Discarding malformed session snapshot: {}", e);
                self.discard_snapshot().await;
                return SessionState::Unauthenticated;
            }
        };

        match self.users.find_by_id(snapshot.id).await {
            Ok(Some(_)) => {
                info!("Restored session for {}", snapshot.email);
                // The snapshot as persisted becomes the session, not a
                // fresh store read.
                SessionState::Authenticated(snapshot)
            }
            Ok(None) => {
                info!("Discarding stale session for deleted user {}", snapshot.id);
                self.discard_snapshot().await;
                SessionState::Unauthenticated
            }
            Err(e) => {
                warn!("Could not verify session snapshot: {}", e);
                SessionState::Unauthenticated
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> SessionErrorResult<UserProfile> {
        self.simulate_remote_call().await;

        let profile = self.users.authenticate(email, password).await?;
        self.persist_session(&profile).await?;
        *self.state.write().await = SessionState::Authenticated(profile.clone());

        info!("User {} logged in", profile.email);
        Ok(profile)
    }

    pub async fn register(&self, new_user: NewUser) -> SessionErrorResult<UserProfile> {
        self.simulate_remote_call().await;

        let profile = self.users.create(new_user).await?;
        self.persist_session(&profile).await?;
        *self.state.write().await = SessionState::Authenticated(profile.clone());

        info!("User {} registered", profile.email);
        Ok(profile)
    }

    /// Unconditional; cannot fail. A snapshot that will not delete is
    /// logged and left for the next restoration pass to clean up.
    pub async fn logout(&self) {
        *self.state.write().await = SessionState::Unauthenticated;
        self.discard_snapshot().await;
        info!("Logged out");
    }

    /// Update the logged-in user's record, then replace and re-persist the
    /// session with the updated projection.
    pub async fn update_profile(&self, update: UserUpdate) -> SessionErrorResult<UserProfile> {
        let current = self
            .current_session()
            .await
            .ok_or_else(|| SessionError::no_active_session())?;

        let profile = self.users.update(current.id, update).await?;
        self.persist_session(&profile).await?;
        *self.state.write().await = SessionState::Authenticated(profile.clone());

        Ok(profile)
    }

    pub async fn current_session(&self) -> Option<UserProfile> {
        match &*self.state.read().await {
            SessionState::Authenticated(profile) => Some(profile.clone()),
            _ => None,
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    async fn persist_session(&self, profile: &UserProfile) -> SessionErrorResult<()> {
        let json = serde_json::to_string(profile)
            .map_err(|e| SessionError::persistence(format!("failed to serialize session: {}", e)))?;

        self.kv
            .put(SESSION_BUCKET, &json)
            .await
            .map_err(|e| SessionError::persistence(e.to_string()))
    }

    async fn discard_snapshot(&self) {
        if let Err(e) = self.kv.remove(SESSION_BUCKET).await {
            warn!("Could not remove session snapshot: {}", e);
        }
    }

    async fn simulate_remote_call(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }
}
