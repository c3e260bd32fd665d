//! Raw record wire types and field coercion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One fragment of a rich-text field. Styling metadata beyond `text`
/// is ignored at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub text: String,
}

/// A field value as stored in a Bitable cell.
///
/// Cells are shape-polymorphic: the same column kind may arrive as a
/// plain scalar or as a list of rich-text segments. The variant is
/// resolved once here, at the deserialization boundary, and never
/// re-inspected downstream. Shapes that match none of the expected
/// variants land in `Other` and are passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Segments(Vec<Segment>),
    Other(serde_json::Value),
}

impl FieldValue {
    /// Coerce to display text: a scalar string as-is, rich-text
    /// segments joined with single spaces in original order, anything
    /// else the empty string.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Segments(segments) => segments
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            _ => String::new(),
        }
    }

    /// Coerce to an epoch-milliseconds timestamp. Zero is treated the
    /// same as absent (the upstream writes 0 for cleared date cells).
    pub fn as_millis(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) if *n != 0.0 => Some(*n as i64),
            _ => None,
        }
    }

    /// Coerce to a monetary amount, defaulting to zero.
    pub fn as_amount(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// Coerce to a boolean, defaulting to false.
    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }
}

/// One record as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub record_id: String,
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

impl RawRecord {
    /// Look up a field by column name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
