//! Single-key sorting with proper three-way comparators.
//!
//! Exactly one sort key is active at a time. Comparators return a full
//! [`Ordering`] (including the equal case) and the sort is stable, so equal
//! keys keep their relative order across re-renders. Records whose key field
//! is missing or unparseable sort after all comparable records regardless of
//! direction.

use planora_model::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

/// The field a sort directive orders by, with its comparison type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Integer comparison after grouped-string coercion (deal amounts,
    /// floors, build years).
    Numeric(String),
    /// Decimal comparison (areas).
    Decimal(String),
    /// Lexicographic comparison on the raw string (dates, names).
    Text(String),
}

/// The single active field + direction used to order a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortDirective {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compares two records under this directive.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match &self.key {
            SortKey::Numeric(ptr) => {
                self.ranked(a.numeric_field(ptr), b.numeric_field(ptr), Ord::cmp)
            }
            SortKey::Decimal(ptr) => {
                self.ranked(a.decimal_field(ptr), b.decimal_field(ptr), |x, y| {
                    x.total_cmp(y)
                })
            }
            SortKey::Text(ptr) => self.ranked(a.get_str(ptr), b.get_str(ptr), Ord::cmp),
        }
    }

    /// Sorts in place, stably.
    pub fn apply(&self, records: &mut [Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    /// Returns a sorted copy, leaving the input untouched.
    pub fn sorted(&self, records: &[Record]) -> Vec<Record> {
        let mut out = records.to_vec();
        self.apply(&mut out);
        out
    }

    // Missing keys always rank last; direction only flips comparable pairs.
    fn ranked<T>(
        &self,
        a: Option<T>,
        b: Option<T>,
        cmp: impl Fn(&T, &T) -> Ordering,
    ) -> Ordering {
        match (a, b) {
            (Some(x), Some(y)) => self.direction.apply(cmp(&x, &y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
