//! Tenant access token exchange.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::BitableConfig;
use crate::error::BitableError;

/// Token exchange request body.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    app_id: &'a str,
    app_secret: &'a str,
}

/// Token exchange response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    code: i64,
    #[serde(default)]
    msg: String,
    tenant_access_token: Option<String>,
}

/// Exchange the configured app id/secret for a tenant access token.
///
/// One POST, one attempt, no caching: tokens are short-lived and their
/// expiry is not tracked locally, so every fetch cycle pays this cost.
pub(crate) async fn tenant_access_token(
    http: &Client,
    config: &BitableConfig,
) -> Result<String, BitableError> {
    let url = format!(
        "{}/open-apis/auth/v3/tenant_access_token/internal",
        config.api_url
    );
    debug!("Requesting tenant access token");

    let response = http
        .post(&url)
        .json(&TokenRequest {
            app_id: &config.app_id,
            app_secret: &config.app_secret,
        })
        .send()
        .await
        .map_err(|e| BitableError::Authentication(format!("token request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BitableError::Authentication(format!(
            "token endpoint returned {}: {}",
            status.as_u16(),
            body
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| BitableError::Authentication(format!("token response unreadable: {}", e)))?;

    let token = parse_token_response(&body)?;
    info!("Obtained tenant access token");
    Ok(token)
}

/// Parse a token exchange response body.
fn parse_token_response(body: &str) -> Result<String, BitableError> {
    let parsed: TokenResponse = serde_json::from_str(body)
        .map_err(|e| BitableError::Authentication(format!("malformed token response: {}", e)))?;

    if parsed.code != 0 {
        return Err(BitableError::Authentication(format!(
            "token endpoint returned code {}: {}",
            parsed.code, parsed.msg
        )));
    }

    parsed
        .tenant_access_token
        .ok_or_else(|| BitableError::Authentication("response lacks tenant_access_token".to_string()))
}
