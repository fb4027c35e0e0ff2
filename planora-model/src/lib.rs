//! Core record model for Planora.
//!
//! Defines the universal types the list-view and session subsystems depend on:
//! - [`Record`] — the generic data container (id, type, JSON payload, fetch time)
//! - Field accessors over JSON pointers, including the numeric coercion rules
//!   used by backends that ship currency amounts as grouped strings ("50,000")
//!
//! All domain-specific shapes (trade entries, venue listings, budget rows)
//! stay in their backend collections; the client core only ever addresses
//! individual fields by JSON pointer.

mod record;

pub use record::Record;
