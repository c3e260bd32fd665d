//! Normalized debt rows.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

/// Display string for a date the upstream record does not carry.
pub const UNKNOWN_DATE: &str = "unknown";

/// Paid/unpaid status of a debt record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    Paid,
    Unpaid,
}

impl DebtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtStatus::Paid => "paid",
            DebtStatus::Unpaid => "unpaid",
        }
    }
}

impl std::fmt::Display for DebtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One debt record, flattened for display.
///
/// Absent dates stay `None` and render as the literal `"unknown"`;
/// they are excluded from month grouping. Amounts are signed: negative
/// means "I owe", positive "owed to me".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtRow {
    /// Debt name, flattened from rich text.
    pub name: String,
    /// Debtor code the record belongs to.
    pub debtor: String,
    /// Date the debt was recorded.
    pub debt_date: Option<NaiveDate>,
    /// When the debt occurred, in local (+07:00) time.
    pub occurred_at: Option<DateTime<FixedOffset>>,
    /// Signed amount; zero when the upstream field is absent or null.
    pub amount: f64,
    /// Free-form note, flattened from rich text.
    pub note: String,
    /// Paid/unpaid status.
    pub status: DebtStatus,
}

impl DebtRow {
    /// `dd/mm/YYYY`, or `"unknown"` when the record has no date.
    pub fn debt_date_display(&self) -> String {
        match self.debt_date {
            Some(date) => date.format("%d/%m/%Y").to_string(),
            None => UNKNOWN_DATE.to_string(),
        }
    }

    /// `dd/mm/YYYY HH:MM:SS`, or `"unknown"` when absent.
    pub fn occurred_at_display(&self) -> String {
        match self.occurred_at {
            Some(ts) => ts.format("%d/%m/%Y %H:%M:%S").to_string(),
            None => UNKNOWN_DATE.to_string(),
        }
    }

    /// Whether the debt is still outstanding.
    pub fn is_unpaid(&self) -> bool {
        self.status == DebtStatus::Unpaid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: Option<NaiveDate>) -> DebtRow {
        DebtRow {
            name: "lunch".to_string(),
            debtor: "NT01".to_string(),
            debt_date: date,
            occurred_at: None,
            amount: 50_000.0,
            note: String::new(),
            status: DebtStatus::Unpaid,
        }
    }

    #[test]
    fn test_date_display() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(row(Some(date)).debt_date_display(), "07/03/2024");
        assert_eq!(row(None).debt_date_display(), "unknown");
        assert_eq!(row(None).occurred_at_display(), "unknown");
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(DebtStatus::Paid.as_str(), "paid");
        assert_eq!(DebtStatus::Unpaid.to_string(), "unpaid");
    }
}
