//! Coercion of raw Bitable records into [`DebtRow`]s.

use bitable::RawRecord;
use chrono::{DateTime, FixedOffset, Utc};

use crate::row::{DebtRow, DebtStatus};

/// Column names of the upstream Lark tables. The tables are maintained
/// in Vietnamese; these are the literal column headers, not
/// translations.
pub mod fields {
    /// Debt name (rich text or scalar).
    pub const DEBT_NAME: &str = "Tên khoản nợ";
    /// Free-form note (rich text or scalar).
    pub const NOTE: &str = "Ghi chú khoản nợ";
    /// Date the debt was recorded, epoch milliseconds.
    pub const DEBT_DATE: &str = "Ngày ghi nợ";
    /// When the debt occurred, epoch milliseconds.
    pub const OCCURRED_AT: &str = "Thời phát phát sinh của khoản nợ";
    /// Signed amount.
    pub const AMOUNT: &str = "Số tiền ghi nợ";
    /// Paid checkbox.
    pub const PAID: &str = "Đã trả";
    /// Debtor code; also the lookup column of the config table.
    pub const DEBTOR: &str = "Người nợ";
    /// Phone number column of the config table.
    pub const PHONE: &str = "Số điện thoại";
}

/// Source timestamps are UTC; display is Vietnam local time.
const VN_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Convert epoch milliseconds to a +07:00 datetime.
fn local_datetime(millis: i64) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(VN_UTC_OFFSET_SECS)?;
    let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;
    Some(utc.with_timezone(&offset))
}

/// Flatten one raw record into a [`DebtRow`].
///
/// Pure and idempotent. Missing optional fields fall back to defaults
/// (empty text, no date, zero amount, unpaid) rather than failing;
/// fields of an unexpected shape are not validated and coerce to the
/// same defaults.
pub fn normalize_record(record: &RawRecord) -> DebtRow {
    let text = |name: &str| {
        record
            .field(name)
            .map(|v| v.as_text())
            .unwrap_or_default()
    };

    let timestamp = |name: &str| {
        record
            .field(name)
            .and_then(|v| v.as_millis())
            .and_then(local_datetime)
    };

    let amount = record
        .field(fields::AMOUNT)
        .map(|v| v.as_amount())
        .unwrap_or(0.0);

    let paid = record
        .field(fields::PAID)
        .map(|v| v.as_bool())
        .unwrap_or(false);

    DebtRow {
        name: text(fields::DEBT_NAME),
        debtor: text(fields::DEBTOR),
        debt_date: timestamp(fields::DEBT_DATE).map(|dt| dt.date_naive()),
        occurred_at: timestamp(fields::OCCURRED_AT),
        amount,
        note: text(fields::NOTE),
        status: if paid {
            DebtStatus::Paid
        } else {
            DebtStatus::Unpaid
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitable::RawRecord;

    fn record_from_json(fields_json: serde_json::Value) -> RawRecord {
        serde_json::from_value(serde_json::json!({
            "record_id": "recTest",
            "fields": fields_json,
        }))
        .unwrap()
    }

    #[test]
    fn test_full_record() {
        // 2024-03-07 00:00:00 UTC -> 07:00 +07:00 same day
        let record = record_from_json(serde_json::json!({
            "Tên khoản nợ": [{"text": "coffee"}, {"text": "run"}],
            "Ghi chú khoản nợ": "paid half",
            "Ngày ghi nợ": 1_709_769_600_000i64,
            "Thời phát phát sinh của khoản nợ": 1_709_769_600_000i64,
            "Số tiền ghi nợ": 150_000,
            "Đã trả": false,
            "Người nợ": "NT01",
        }));

        let row = normalize_record(&record);
        assert_eq!(row.name, "coffee run");
        assert_eq!(row.note, "paid half");
        assert_eq!(row.debtor, "NT01");
        assert_eq!(row.amount, 150_000.0);
        assert_eq!(row.status, DebtStatus::Unpaid);
        assert_eq!(row.debt_date_display(), "07/03/2024");
        assert_eq!(row.occurred_at_display(), "07/03/2024 07:00:00");
    }

    #[test]
    fn test_empty_record_defaults() {
        let row = normalize_record(&record_from_json(serde_json::json!({})));

        assert_eq!(row.name, "");
        assert_eq!(row.note, "");
        assert_eq!(row.debtor, "");
        assert_eq!(row.amount, 0.0);
        assert!(row.debt_date.is_none());
        assert!(row.occurred_at.is_none());
        assert_eq!(row.status, DebtStatus::Unpaid);
    }

    #[test]
    fn test_absent_amount_is_zero() {
        let record = record_from_json(serde_json::json!({
            "Tên khoản nợ": "no amount",
        }));
        assert_eq!(normalize_record(&record).amount, 0.0);
    }

    #[test]
    fn test_null_amount_is_zero() {
        let record = record_from_json(serde_json::json!({
            "Số tiền ghi nợ": null,
        }));
        assert_eq!(normalize_record(&record).amount, 0.0);
    }

    #[test]
    fn test_zero_timestamp_is_unknown() {
        let record = record_from_json(serde_json::json!({
            "Ngày ghi nợ": 0,
        }));
        let row = normalize_record(&record);
        assert!(row.debt_date.is_none());
        assert_eq!(row.debt_date_display(), "unknown");
    }

    #[test]
    fn test_paid_flag() {
        let record = record_from_json(serde_json::json!({ "Đã trả": true }));
        assert_eq!(normalize_record(&record).status, DebtStatus::Paid);
    }

    #[test]
    fn test_idempotent() {
        let record = record_from_json(serde_json::json!({
            "Tên khoản nợ": [{"text": "a"}, {"text": "b"}],
            "Ngày ghi nợ": 1_709_769_600_000i64,
            "Số tiền ghi nợ": -20_000,
        }));

        let first = normalize_record(&record);
        let second = normalize_record(&record);
        assert_eq!(first, second);
    }
}
