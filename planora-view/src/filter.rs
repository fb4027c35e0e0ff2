//! Filter predicates over record collections.
//!
//! A [`FilterSet`] maps JSON pointers to [`Predicate`]s. A record is retained
//! only if every *active* predicate passes (logical AND). Predicates with no
//! usable value entered (empty substring pattern, both range bounds unset)
//! are inactive and exclude nothing — this is an explicit check, since an
//! empty pattern would otherwise trivially match everything while meaning
//! "no filter entered yet".

use planora_model::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// How numeric-range predicates treat a field that cannot be parsed.
///
/// Backends ship currency amounts as decorated strings; a value with no
/// digits at all has no numeric interpretation. `Exclude` drops such records
/// from any active range predicate, `CoerceZero` evaluates them as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnparsedNumericPolicy {
    /// Record fails any active range predicate on the unparseable field.
    #[default]
    Exclude,
    /// The unparseable field evaluates as zero.
    CoerceZero,
}

/// A single inclusion predicate on one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Case-insensitive substring match on a string field.
    Substring(String),
    /// Inclusive numeric range; either bound optional. String-encoded
    /// amounts are parsed with non-digit characters stripped.
    NumericRange { min: Option<i64>, max: Option<i64> },
    /// Exact string equality.
    Exact(String),
    /// Inclusive date range, compared lexicographically on `YYYY-MM-DD`
    /// strings. No normalization is performed.
    DateRange {
        from: Option<String>,
        to: Option<String>,
    },
}

impl Predicate {
    /// Returns true if the predicate has a usable value and constrains
    /// anything. An inactive predicate excludes nothing.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Substring(pat) => !pat.trim().is_empty(),
            Self::NumericRange { min, max } => min.is_some() || max.is_some(),
            Self::Exact(value) => !value.is_empty(),
            Self::DateRange { from, to } => from.is_some() || to.is_some(),
        }
    }

    fn matches(&self, record: &Record, pointer: &str, policy: UnparsedNumericPolicy) -> bool {
        match self {
            Self::Substring(pat) => record
                .get_str(pointer)
                .is_some_and(|v| v.to_lowercase().contains(&pat.trim().to_lowercase())),
            Self::NumericRange { min, max } => {
                let value = match record.numeric_field(pointer) {
                    Some(v) => v,
                    None => match policy {
                        UnparsedNumericPolicy::Exclude => return false,
                        UnparsedNumericPolicy::CoerceZero => 0,
                    },
                };
                min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
            }
            Self::Exact(expected) => record.get_str(pointer) == Some(expected.as_str()),
            Self::DateRange { from, to } => record.get_str(pointer).is_some_and(|date| {
                from.as_deref().map_or(true, |lo| date >= lo)
                    && to.as_deref().map_or(true, |hi| date <= hi)
            }),
        }
    }
}

/// The active set of inclusion predicates applied to a record collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Predicates keyed by JSON pointer (e.g., "/dealAmount").
    predicates: BTreeMap<String, Predicate>,
    /// Policy for numeric fields that fail to parse.
    numeric_policy: UnparsedNumericPolicy,
}

impl FilterSet {
    /// Creates an empty filter set (passes everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unparsed-numeric policy.
    #[must_use]
    pub fn with_numeric_policy(mut self, policy: UnparsedNumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }

    /// Adds or replaces the predicate for a field, builder style.
    #[must_use]
    pub fn with(mut self, pointer: impl Into<String>, predicate: Predicate) -> Self {
        self.predicates.insert(pointer.into(), predicate);
        self
    }

    /// Adds or replaces the predicate for a field.
    pub fn set(&mut self, pointer: impl Into<String>, predicate: Predicate) {
        self.predicates.insert(pointer.into(), predicate);
    }

    /// Removes the predicate for a field.
    pub fn clear(&mut self, pointer: &str) {
        self.predicates.remove(pointer);
    }

    /// Number of active predicates.
    pub fn active_count(&self) -> usize {
        self.predicates.values().filter(|p| p.is_active()).count()
    }

    /// Returns true if no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Returns true if the record passes every active predicate.
    pub fn matches(&self, record: &Record) -> bool {
        self.predicates
            .iter()
            .filter(|(_, p)| p.is_active())
            .all(|(pointer, p)| p.matches(record, pointer, self.numeric_policy))
    }

    /// Applies the filter set to a collection, returning the retained
    /// records in their original order. Pure; the input is not mutated.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        let retained: Vec<Record> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        debug!(
            input = records.len(),
            retained = retained.len(),
            active = self.active_count(),
            "applied filter set"
        );
        retained
    }
}
