//! VietQR payment info formatting.

use serde::Serialize;

/// Receiving bank account for debt payments.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Bank short code in the VietQR image path, e.g. `MB`.
    pub bank: String,
    /// Account alias or number.
    pub account: String,
}

/// Display-ready payment details accompanying the QR image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentInfo {
    pub bank: String,
    pub account: String,
    /// Amount truncated to whole currency units.
    pub amount: i64,
    /// Transfer description, unescaped.
    pub description: String,
}

impl PaymentInfo {
    /// Build payment details for a debtor's outstanding total.
    pub fn new(config: &PaymentConfig, total: f64, debtor: &str) -> Self {
        Self {
            bank: config.bank.clone(),
            account: config.account.clone(),
            amount: total as i64,
            description: format!("{} tra no", debtor),
        }
    }

    /// QR image URL: the fixed VietQR template with the integer amount
    /// and the URL-escaped description embedded.
    pub fn qr_url(&self) -> String {
        format!(
            "https://img.vietqr.io/image/{}-{}-print.png?amount={}&addInfo={}",
            self.bank,
            self.account,
            self.amount,
            urlencoding::encode(&self.description)
        )
    }
}

/// Shorthand for building just the QR image URL.
pub fn qr_image_url(config: &PaymentConfig, total: f64, debtor: &str) -> String {
    PaymentInfo::new(config, total, debtor).qr_url()
}
