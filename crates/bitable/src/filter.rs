//! Structured filter expressions for record search.

use serde::{Deserialize, Serialize};

/// How multiple conditions combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conjunction {
    And,
    Or,
}

/// Comparison operator for a single condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Is,
    Contains,
}

/// One `{field, operator, value}` predicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub field_name: String,
    pub operator: Operator,
    pub value: Vec<String>,
}

/// A conjunction of conditions, serialized in the wire format the
/// search endpoint expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilter {
    pub conjunction: Conjunction,
    pub conditions: Vec<Condition>,
}

impl SearchFilter {
    /// Filter on a single field with an exact-match condition.
    pub fn field_is(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            conjunction: Conjunction::And,
            conditions: vec![Condition {
                field_name: field.into(),
                operator: Operator::Is,
                value: vec![value.into()],
            }],
        }
    }

    /// Filter on a single field with a substring condition.
    pub fn field_contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            conjunction: Conjunction::And,
            conditions: vec![Condition {
                field_name: field.into(),
                operator: Operator::Contains,
                value: vec![value.into()],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_is_wire_shape() {
        let filter = SearchFilter::field_is("Debtor", "NT01");
        let json = serde_json::to_value(&filter).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "conjunction": "and",
                "conditions": [{
                    "field_name": "Debtor",
                    "operator": "is",
                    "value": ["NT01"]
                }]
            })
        );
    }

    #[test]
    fn test_field_contains_wire_shape() {
        let filter = SearchFilter::field_contains("Phone", "0912345678");
        let json = serde_json::to_value(&filter).unwrap();

        assert_eq!(json["conditions"][0]["operator"], "contains");
        assert_eq!(json["conditions"][0]["value"][0], "0912345678");
    }
}
