//! Pure reductions over normalized debt rows.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::row::DebtRow;

/// Per-month debt totals, split by amount sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyTotals {
    /// Sum of positive amounts (owed to me).
    pub owed_to_me: f64,
    /// Sum of negative amounts' absolute values (I owe).
    pub i_owe: f64,
}

/// Group rows by the `YYYY/MM` of their debt date and total the
/// amounts per sign bucket. Rows without a date cannot be grouped and
/// are excluded.
pub fn totals_by_month(rows: &[DebtRow]) -> BTreeMap<String, MonthlyTotals> {
    let mut months: BTreeMap<String, MonthlyTotals> = BTreeMap::new();

    for row in rows {
        let Some(date) = row.debt_date else { continue };
        let totals = months.entry(date.format("%Y/%m").to_string()).or_default();

        if row.amount >= 0.0 {
            totals.owed_to_me += row.amount;
        } else {
            totals.i_owe += -row.amount;
        }
    }

    months
}

/// Outstanding total for one debtor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtorTotal {
    pub debtor: String,
    pub total: f64,
}

/// Total unpaid amounts per debtor, sorted ascending by sum so the
/// largest debts rank last in a horizontal chart.
pub fn unpaid_by_debtor(rows: &[DebtRow]) -> Vec<DebtorTotal> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();

    for row in rows.iter().filter(|r| r.is_unpaid()) {
        *sums.entry(row.debtor.as_str()).or_default() += row.amount;
    }

    let mut totals: Vec<DebtorTotal> = sums
        .into_iter()
        .map(|(debtor, total)| DebtorTotal {
            debtor: debtor.to_string(),
            total,
        })
        .collect();

    totals.sort_by(|a, b| a.total.partial_cmp(&b.total).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// Sum of unpaid row amounts (the "remaining to pay" metric).
pub fn total_unpaid(rows: &[DebtRow]) -> f64 {
    rows.iter()
        .filter(|r| r.is_unpaid())
        .map(|r| r.amount)
        .sum()
}
