use serde::{Deserialize, Serialize};

/// A generic record in a fetched domain collection.
///
/// All backend list payloads flow through this type. The `data` field holds
/// arbitrary JSON whose structure is defined by the backend collection; the
/// view engine addresses individual fields by JSON pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub record_type: String,
    pub data: serde_json::Value,
    /// Milliseconds since epoch at which this record was fetched.
    pub fetched_at: i64,
}

impl Record {
    /// Extract a string value from `data` using a JSON pointer (e.g., "/dealDate").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.data.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract an integer field, coercing string-encoded amounts.
    ///
    /// Currency-like fields arrive as grouped strings ("50,000"); every
    /// non-digit byte is stripped before parsing (a leading minus sign is
    /// kept). A field with no digits at all yields `None`.
    pub fn numeric_field(&self, pointer: &str) -> Option<i64> {
        match self.data.pointer(pointer)? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => parse_grouped_int(s),
            _ => None,
        }
    }

    /// Extract a decimal field, accepting both JSON numbers and numeric
    /// strings ("84.5").
    pub fn decimal_field(&self, pointer: &str) -> Option<f64> {
        match self.data.pointer(pointer)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Parses an integer out of a string that may carry grouping or currency
/// decoration. Strips every non-digit character; a leading `-` is honored.
fn parse_grouped_int(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    let negative = trimmed.starts_with('-');
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
