//! Session expiry watchdog.
//!
//! Forces logout at (or very near) credential expiry without a server round
//! trip. Two mechanisms are armed together: a one-shot timer that fires at
//! the expiry deadline, and a periodic re-check that catches deadlines
//! missed while the host was suspended. Whichever notices expiry first wins;
//! the logout action is idempotent so the loser is a no-op.
//!
//! Re-arming aborts the pending task before scheduling a new one, and every
//! armed task carries the session ID it was armed against — a stale timer
//! must never log out a newer, still-valid session.

use crate::credential::now_ms;
use crate::store::SessionStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Configuration for the watchdog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchdogConfig {
    /// How often the periodic re-check runs (in seconds).
    pub check_interval_secs: u64,
    /// How far before expiry the warning is emitted (in milliseconds).
    pub warn_lead_ms: i64,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 30,
            warn_lead_ms: 60_000,
        }
    }
}

/// Observer for watchdog-initiated logouts.
///
/// The store is already cleared when this fires; the hook is for collaborators
/// that need to react (drop caches, route to the login screen).
pub trait ExpiryHook: Send + Sync {
    fn on_forced_logout(&self, session_id: Uuid);
}

/// The background mechanism that detects session expiry and forces logout.
pub struct Watchdog {
    store: SessionStore,
    config: WatchdogConfig,
    hook: Option<Arc<dyn ExpiryHook>>,
    task: Option<JoinHandle<()>>,
}

impl Watchdog {
    /// Creates an unarmed watchdog over the given store.
    pub fn new(store: SessionStore, config: WatchdogConfig) -> Self {
        Self {
            store,
            config,
            hook: None,
            task: None,
        }
    }

    /// Sets the forced-logout observer.
    pub fn set_hook(&mut self, hook: Arc<dyn ExpiryHook>) {
        self.hook = Some(hook);
    }

    /// Returns true if a timer task is currently armed.
    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Milliseconds until the current credential expires, zero if there is
    /// no session or it is already expired.
    pub async fn remaining_ms(&self) -> i64 {
        self.store
            .credential()
            .await
            .map_or(0, |c| c.remaining_ms(now_ms()))
    }

    /// Arms the watchdog against the store's current credential.
    ///
    /// Any previously armed timers are cancelled first. If the credential is
    /// already expired (or has no expiry instant), logout is forced
    /// immediately instead of scheduling anything.
    pub async fn arm(&mut self) {
        self.disarm();

        let Some(cred) = self.store.credential().await else {
            debug!("watchdog arm with no session");
            return;
        };

        let session_id = cred.session_id;
        let remaining = cred.remaining_ms(now_ms());
        if remaining == 0 {
            force_logout_if_current(&self.store, self.hook.as_ref(), session_id).await;
            return;
        }

        debug!(session = %session_id, remaining_ms = remaining, "watchdog armed");

        let store = self.store.clone();
        let hook = self.hook.clone();
        let config = self.config.clone();
        self.task = Some(tokio::spawn(run_timers(
            store, hook, config, session_id, remaining,
        )));
    }

    /// Cancels any pending timers. Safe to call when unarmed.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("watchdog disarmed");
        }
    }
}

impl Drop for Watchdog {
    fn drop(&mut self) {
        self.disarm();
    }
}

/// The armed timer loop: one-shot deadline + periodic re-check.
async fn run_timers(
    store: SessionStore,
    hook: Option<Arc<dyn ExpiryHook>>,
    config: WatchdogConfig,
    session_id: Uuid,
    remaining_ms: i64,
) {
    let deadline = sleep(Duration::from_millis(remaining_ms as u64));
    tokio::pin!(deadline);

    let warn_after = remaining_ms - config.warn_lead_ms;
    let warn_timer = sleep(Duration::from_millis(warn_after.max(0) as u64));
    tokio::pin!(warn_timer);
    // Not enough lead time left for a warning to be useful.
    let mut warned = warn_after <= 0;

    let mut check = interval(Duration::from_secs(config.check_interval_secs));
    // The first tick completes immediately; consume it.
    check.tick().await;

    loop {
        tokio::select! {
            _ = &mut warn_timer, if !warned => {
                warned = true;
                warn!(session = %session_id, lead_ms = config.warn_lead_ms, "session expiring soon");
            }
            _ = &mut deadline => {
                force_logout_if_current(&store, hook.as_ref(), session_id).await;
                break;
            }
            _ = check.tick() => {
                match store.credential().await {
                    Some(cred) if cred.session_id == session_id => {
                        if cred.is_expired(now_ms()) {
                            force_logout_if_current(&store, hook.as_ref(), session_id).await;
                            break;
                        }
                    }
                    // Session replaced or gone; this watchdog is stale.
                    _ => break,
                }
            }
        }
    }
}

/// Forces logout if the store still holds the session this timer was armed
/// against. Stale timers fall through without touching the newer session.
async fn force_logout_if_current(
    store: &SessionStore,
    hook: Option<&Arc<dyn ExpiryHook>>,
    session_id: Uuid,
) {
    match store.credential().await {
        Some(cred) if cred.session_id == session_id => {
            info!(session = %session_id, "session expired, forcing logout");
            if let Err(e) = store.logout().await {
                warn!(error = %e, "failed to clear persisted credential on forced logout");
            }
            if let Some(hook) = hook {
                hook.on_forced_logout(session_id);
            }
        }
        Some(_) => debug!(session = %session_id, "stale expiry timer ignored"),
        None => debug!("expiry timer fired with no session"),
    }
}
