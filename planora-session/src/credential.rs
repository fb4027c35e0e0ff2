//! The session credential and its expiry arithmetic.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current wall-clock time in milliseconds since epoch.
#[must_use]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// The bearer token and expiry instant for an authenticated session.
///
/// `expires_at_ms` is always milliseconds since epoch. A credential with no
/// expiry is treated as already expired — issuing such a credential is a
/// boundary bug, and the safe interpretation is "invalid".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredential {
    /// Identity of this session instance. A refreshed credential gets a new
    /// ID, which is how stale watchdog timers are told apart from live ones.
    pub session_id: Uuid,
    /// The raw bearer token.
    pub token: String,
    /// Expiry instant in milliseconds since epoch.
    pub expires_at_ms: Option<i64>,
    /// Whether the backend confirmed authentication.
    pub authenticated: bool,
}

impl SessionCredential {
    /// Creates a credential for a freshly logged-in session.
    pub fn new(token: impl Into<String>, expires_at_ms: Option<i64>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            token: token.into(),
            expires_at_ms,
            authenticated: true,
        }
    }

    /// Returns true if the credential is expired at `now_ms`.
    /// A missing expiry is expired (fail-closed).
    #[must_use]
    pub fn is_expired(&self, now_ms: i64) -> bool {
        match self.expires_at_ms {
            Some(exp) => now_ms >= exp,
            None => true,
        }
    }

    /// Milliseconds until expiry, clamped at zero. Never negative; a missing
    /// expiry yields zero.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        self.expires_at_ms
            .map_or(0, |exp| (exp - now_ms).max(0))
    }
}

/// The session lifecycle as observed at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No credential present.
    NoSession,
    /// Credential present and not yet expired.
    ActiveValid,
    /// Credential present but past its expiry; the watchdog will force
    /// logout from here.
    ActiveExpired,
}
