//! Session credential store and expiry watchdog for Planora.
//!
//! This crate handles:
//! - The bearer credential for the current session ([`SessionCredential`])
//! - A shared, injectable store with single-writer discipline
//!   ([`SessionStore`]) and optional JSON file persistence
//! - The [`Watchdog`] that forces logout at credential expiry without a
//!   server round trip
//!
//! # Design Principles
//!
//! - **Fail-closed**: a credential without an expiry instant is treated as
//!   already expired
//! - **Milliseconds everywhere**: `expires_at_ms` is milliseconds since
//!   epoch; any other representation is the API boundary's problem
//! - **No globals**: the store is a handle passed to collaborators, so tests
//!   never share state
//! - **Idempotent logout**: the watchdog path, the 401 path, and user
//!   logout all converge on the same no-op-if-absent action

mod credential;
mod error;
mod store;
mod watchdog;

pub use credential::{now_ms, SessionCredential, SessionState};
pub use error::{SessionError, SessionResult};
pub use store::SessionStore;
pub use watchdog::{ExpiryHook, Watchdog, WatchdogConfig};
