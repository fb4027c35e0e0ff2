//! List view engine for Planora.
//!
//! Turns a raw fetched collection into what the presentation layer actually
//! shows: filter → sort → paginate, as a strict pipeline over in-memory
//! [`Record`](planora_model::Record)s.
//!
//! - [`FilterSet`] — the active inclusion predicates (AND semantics)
//! - [`SortDirective`] — the single active sort key + direction
//! - [`PageRequest`] / [`paginate`] — contiguous page slicing (0-based)
//! - [`ListView`] — the stateful reducer that owns the pipeline and resets
//!   the page whenever filter or sort inputs change
//!
//! Everything here is synchronous and pure; the engine performs no I/O and
//! never panics on malformed backend data — the worst case is an empty
//! result set.

mod error;
mod filter;
mod page;
mod sort;
mod view;

pub use error::{ViewError, ViewResult};
pub use filter::{FilterSet, Predicate, UnparsedNumericPolicy};
pub use page::{paginate, total_pages, PageRequest};
pub use sort::{SortDirection, SortDirective, SortKey};
pub use view::ListView;
