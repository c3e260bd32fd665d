//! Lookup pipeline: phone number to debtor to normalized debt rows.

use bitable::{BitableClient, SearchFilter};
use debt_core::{
    fields, normalize_record, total_unpaid, validate_phone, DebtRow, PaymentConfig, PaymentInfo,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::AppError;

/// A debtor resolved from a phone number.
///
/// The upstream config table carries a single debtor column, so the
/// display name and the code are the same value. Kept that way on
/// purpose: resolving a separate display name would change product
/// behavior.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtorRef {
    pub code: String,
    pub display_name: String,
}

/// One complete lookup result, assembled per request. There is no
/// session state behind this; every lookup builds a fresh report.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub debtor: DebtorRef,
    pub rows: Vec<DebtRow>,
    pub total_unpaid: f64,
    /// Present only when something is left to pay.
    pub payment: Option<PaymentInfo>,
}

/// Sequential fetch-and-normalize pipeline over the two tables.
pub struct DebtService {
    client: BitableClient,
    config_table: String,
    debt_table: String,
}

impl DebtService {
    pub fn new(
        client: BitableClient,
        config_table: impl Into<String>,
        debt_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            config_table: config_table.into(),
            debt_table: debt_table.into(),
        }
    }

    /// Resolve a phone number to a debtor via a substring search on the
    /// config table's phone column. First match wins; duplicate rows
    /// upstream are not deduplicated.
    pub async fn find_debtor(&self, phone: &str) -> Result<Option<DebtorRef>, AppError> {
        info!(phone, "Looking up debtor by phone number");

        let filter = SearchFilter::field_contains(fields::PHONE, phone);
        let records = self.client.search(&self.config_table, Some(&filter)).await?;

        let Some(first) = records.first() else {
            info!(phone, "No debtor configured for phone number");
            return Ok(None);
        };

        let code = first
            .field(fields::DEBTOR)
            .map(|v| v.as_text())
            .unwrap_or_default();
        if code.is_empty() {
            debug!(phone, "Config row matched but has no debtor code");
            return Ok(None);
        }

        info!(phone, debtor = %code, "Resolved debtor");
        Ok(Some(DebtorRef {
            display_name: code.clone(),
            code,
        }))
    }

    /// Fetch and normalize every debt record of one debtor.
    pub async fn debts_for(&self, debtor_code: &str) -> Result<Vec<DebtRow>, AppError> {
        let filter = SearchFilter::field_is(fields::DEBTOR, debtor_code);
        let records = self.client.search(&self.debt_table, Some(&filter)).await?;

        let rows: Vec<DebtRow> = records.iter().map(normalize_record).collect();
        info!(debtor = debtor_code, rows = rows.len(), "Fetched debt records");
        Ok(rows)
    }

    /// Fetch and normalize the entire debt table (admin view).
    pub async fn all_debts(&self) -> Result<Vec<DebtRow>, AppError> {
        let records = self.client.search(&self.debt_table, None).await?;

        let rows: Vec<DebtRow> = records.iter().map(normalize_record).collect();
        info!(rows = rows.len(), "Fetched full debt table");
        Ok(rows)
    }

    /// The full interactive pipeline: validate the phone number before
    /// any network call, resolve the debtor, fetch the rows, and build
    /// the report. `Ok(None)` means the number is valid but no debtor
    /// is configured for it.
    pub async fn lookup(
        &self,
        phone: &str,
        payment: &PaymentConfig,
    ) -> Result<Option<LookupReport>, AppError> {
        validate_phone(phone)?;

        let Some(debtor) = self.find_debtor(phone).await? else {
            return Ok(None);
        };

        let rows = self.debts_for(&debtor.code).await?;
        let total = total_unpaid(&rows);

        let payment_info = if total > 0.0 {
            Some(PaymentInfo::new(payment, total, &debtor.display_name))
        } else {
            None
        };

        Ok(Some(LookupReport {
            debtor,
            rows,
            total_unpaid: total,
            payment: payment_info,
        }))
    }
}
