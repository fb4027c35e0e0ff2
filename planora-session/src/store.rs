//! The shared session store.
//!
//! A cheap-to-clone handle over the single process-wide credential slot.
//! Only login/logout/refresh mutate it; the watchdog reads it and triggers
//! logout through the same action as everyone else (single-writer
//! discipline, no back-door mutation).

use crate::credential::{now_ms, SessionCredential, SessionState};
use crate::error::SessionResult;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Shared, injectable store for the current session credential.
///
/// Optionally persists the credential as plain JSON at a file path, loading
/// it back on open — the moral equivalent of the browser's local-storage
/// entry.
#[derive(Debug, Clone)]
pub struct SessionStore {
    credential: Arc<RwLock<Option<SessionCredential>>>,
    persist_path: Option<PathBuf>,
}

impl SessionStore {
    /// Creates an in-memory store with no session.
    pub fn new() -> Self {
        Self {
            credential: Arc::new(RwLock::new(None)),
            persist_path: None,
        }
    }

    /// Opens a store backed by a JSON file, loading any persisted
    /// credential. A missing file means no session; a malformed file is
    /// discarded (fail-closed) rather than surfaced.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> SessionResult<Self> {
        let path = path.into();
        let initial = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<SessionCredential>(&raw) {
                Ok(cred) => Some(cred),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "discarding malformed persisted credential");
                    None
                }
            }
        } else {
            None
        };
        Ok(Self {
            credential: Arc::new(RwLock::new(initial)),
            persist_path: Some(path),
        })
    }

    /// Installs the credential for a fresh login.
    pub async fn login(&self, credential: SessionCredential) -> SessionResult<()> {
        info!(session = %credential.session_id, "session login");
        self.write_persisted(Some(&credential))?;
        *self.credential.write().await = Some(credential);
        Ok(())
    }

    /// Replaces the credential after a token refresh. The new credential
    /// carries a new session ID; callers must re-arm any watchdog.
    pub async fn refresh(
        &self,
        token: impl Into<String>,
        expires_at_ms: Option<i64>,
    ) -> SessionResult<SessionCredential> {
        let credential = SessionCredential::new(token, expires_at_ms);
        info!(session = %credential.session_id, "session refreshed");
        self.write_persisted(Some(&credential))?;
        *self.credential.write().await = Some(credential.clone());
        Ok(credential)
    }

    /// Clears the session. Idempotent: logging out with no session is a
    /// no-op, not an error.
    pub async fn logout(&self) -> SessionResult<()> {
        let mut guard = self.credential.write().await;
        match guard.take() {
            Some(cred) => info!(session = %cred.session_id, "session logout"),
            None => debug!("logout with no session (no-op)"),
        }
        drop(guard);
        self.write_persisted(None)
    }

    /// The logout path for a backend 401: same action, louder log.
    pub async fn invalidate(&self) -> SessionResult<()> {
        warn!("session invalidated by backend");
        self.logout().await
    }

    /// Returns a copy of the current credential, if any.
    pub async fn credential(&self) -> Option<SessionCredential> {
        self.credential.read().await.clone()
    }

    /// Returns true if a credential is present and marked authenticated.
    pub async fn is_authenticated(&self) -> bool {
        self.credential
            .read()
            .await
            .as_ref()
            .is_some_and(|c| c.authenticated)
    }

    /// The session lifecycle state at `now_ms`.
    pub async fn state_at(&self, now_ms: i64) -> SessionState {
        match self.credential.read().await.as_ref() {
            None => SessionState::NoSession,
            Some(cred) if cred.is_expired(now_ms) => SessionState::ActiveExpired,
            Some(_) => SessionState::ActiveValid,
        }
    }

    /// The session lifecycle state now.
    pub async fn state(&self) -> SessionState {
        self.state_at(now_ms()).await
    }

    fn write_persisted(&self, credential: Option<&SessionCredential>) -> SessionResult<()> {
        let Some(path) = &self.persist_path else {
            return Ok(());
        };
        match credential {
            Some(cred) => {
                let json = serde_json::to_string_pretty(cred)?;
                std::fs::write(path, json)?;
            }
            None => {
                if path.exists() {
                    std::fs::remove_file(path)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
