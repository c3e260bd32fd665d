//! Configuration for the Bitable client.

use std::env;

use crate::error::BitableError;

/// Default Lark open API base URL.
pub const DEFAULT_API_URL: &str = "https://open.larksuite.com";

/// Configuration for [`crate::BitableClient`].
#[derive(Debug, Clone)]
pub struct BitableConfig {
    /// Lark open API base URL.
    pub api_url: String,

    /// Application id used for the token exchange.
    pub app_id: String,

    /// Application secret used for the token exchange.
    pub app_secret: String,

    /// Bitable base (app) identifier the tables live in.
    pub base_id: String,

    /// When set, every successful search dumps the accumulated items to
    /// `{table_id}_output.json` in the working directory, best effort.
    pub dump_responses: bool,
}

impl Default for BitableConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            app_id: String::new(),
            app_secret: String::new(),
            base_id: String::new(),
            dump_responses: false,
        }
    }
}

impl BitableConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `LARK_APP_ID` - application id
    /// - `LARK_APP_SECRET` - application secret
    /// - `LARK_BASE_ID` - Bitable base identifier
    ///
    /// Optional environment variables:
    /// - `LARK_API_URL` - API base URL (default: https://open.larksuite.com)
    /// - `LARK_DUMP_RESPONSES` - dump search results to disk (default: false)
    pub fn from_env() -> Result<Self, BitableError> {
        let app_id = env::var("LARK_APP_ID")
            .map_err(|_| BitableError::Config("LARK_APP_ID not set".to_string()))?;

        let app_secret = env::var("LARK_APP_SECRET")
            .map_err(|_| BitableError::Config("LARK_APP_SECRET not set".to_string()))?;

        let base_id = env::var("LARK_BASE_ID")
            .map_err(|_| BitableError::Config("LARK_BASE_ID not set".to_string()))?;

        let api_url = env::var("LARK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let dump_responses = env::var("LARK_DUMP_RESPONSES")
            .ok()
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            api_url,
            app_id,
            app_secret,
            base_id,
            dump_responses,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> BitableConfigBuilder {
        BitableConfigBuilder::default()
    }
}

/// Builder for [`BitableConfig`].
#[derive(Debug, Default)]
pub struct BitableConfigBuilder {
    config: BitableConfig,
}

impl BitableConfigBuilder {
    /// Set the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the application id.
    pub fn app_id(mut self, id: impl Into<String>) -> Self {
        self.config.app_id = id.into();
        self
    }

    /// Set the application secret.
    pub fn app_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.app_secret = secret.into();
        self
    }

    /// Set the Bitable base identifier.
    pub fn base_id(mut self, id: impl Into<String>) -> Self {
        self.config.base_id = id.into();
        self
    }

    /// Enable or disable the best-effort result dump.
    pub fn dump_responses(mut self, dump: bool) -> Self {
        self.config.dump_responses = dump;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> BitableConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BitableConfig::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.app_id.is_empty());
        assert!(config.app_secret.is_empty());
        assert!(config.base_id.is_empty());
        assert!(!config.dump_responses);
    }

    #[test]
    fn test_builder_all_options() {
        let config = BitableConfig::builder()
            .api_url("https://open.feishu.cn")
            .app_id("cli_test")
            .app_secret("secret")
            .base_id("bascnTest")
            .dump_responses(true)
            .build();

        assert_eq!(config.api_url, "https://open.feishu.cn");
        assert_eq!(config.app_id, "cli_test");
        assert_eq!(config.app_secret, "secret");
        assert_eq!(config.base_id, "bascnTest");
        assert!(config.dump_responses);
    }
}
