//! Configuration loaded from environment variables.

use std::env;

use bitable::BitableConfig;
use debt_core::{AdminCredentials, PaymentConfig};

use crate::error::AppError;

/// Process-wide configuration: read once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bitable API credentials and base.
    pub bitable: BitableConfig,
    /// Table mapping phone numbers to debtor codes.
    pub config_table: String,
    /// Table holding the debt records.
    pub debt_table: String,
    /// Admin login credentials.
    pub admin: AdminCredentials,
    /// Receiving account for the payment QR.
    pub payment: PaymentConfig,
    /// Optional contact link shown with the payment details.
    pub contact_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `LARK_APP_ID` | Lark application id | (required) |
    /// | `LARK_APP_SECRET` | Lark application secret | (required) |
    /// | `LARK_BASE_ID` | Bitable base id | (required) |
    /// | `LARK_API_URL` | Lark API base URL | `https://open.larksuite.com` |
    /// | `LARK_DUMP_RESPONSES` | Dump search results to disk | `false` |
    /// | `CONFIG_TABLE_ID` | Phone-to-debtor table id | (required) |
    /// | `DEBT_TABLE_ID` | Debt records table id | (required) |
    /// | `ADMIN_USERNAME` | Admin login name | (required) |
    /// | `ADMIN_PASSWORD` | Admin password | (required) |
    /// | `VIETQR_BANK` | VietQR bank short code | `MB` |
    /// | `VIETQR_ACCOUNT` | Receiving account alias | (required) |
    /// | `CONTACT_URL` | Contact link for payers | (none) |
    pub fn from_env() -> Result<Self, AppError> {
        let bitable = BitableConfig::from_env()?;

        let config_table = require("CONFIG_TABLE_ID")?;
        let debt_table = require("DEBT_TABLE_ID")?;

        let admin = AdminCredentials::new(require("ADMIN_USERNAME")?, require("ADMIN_PASSWORD")?);

        let payment = PaymentConfig {
            bank: env::var("VIETQR_BANK").unwrap_or_else(|_| "MB".to_string()),
            account: require("VIETQR_ACCOUNT")?,
        };

        let contact_url = env::var("CONTACT_URL").ok();

        Ok(Self {
            bitable,
            config_table,
            debt_table,
            admin,
            payment,
            contact_url,
        })
    }
}

fn require(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Config(format!("{} not set", name)))
}
