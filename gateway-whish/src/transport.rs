//! Shared HTTP transport for the provider adapters.
//!
//! This is the only place where reqwest failures are classified; everything
//! downstream pattern-matches on `GatewayError` variants instead of probing
//! the transport error for a response.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use gateway_types::{DomainError, GatewayError, PaymentError};

use crate::config::WhishConfig;

/// Builds the provider HTTP client with the fixed request timeout and JSON
/// defaults. Connection reuse comes from reqwest's pool; nothing else is
/// shared between requests.
pub(crate) fn build_client(config: &WhishConfig) -> Result<reqwest::Client, GatewayError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .timeout(config.timeout)
        .default_headers(headers)
        .build()
        .map_err(from_reqwest)
}

/// Sends a request and decodes a 2xx JSON body, translating every failure
/// into the gateway error union.
pub(crate) async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, GatewayError> {
    let response = request.send().await.map_err(from_reqwest)?;
    let status = response.status();

    if status.is_success() {
        // a response was received, so a garbled body is an API failure at
        // the upstream status, never a NETWORK_ERROR
        let body = response.text().await.map_err(from_reqwest)?;
        return serde_json::from_str(&body).map_err(|err| GatewayError::Api {
            status: status.as_u16(),
            code: None,
            message: format!("failed to decode provider response: {err}"),
            details: None,
        });
    }

    let body = response.text().await.unwrap_or_default();
    Err(api_error_from_body(status.as_u16(), &body))
}

/// Validates a configured credential as an HTTP header value, once, at
/// adapter construction.
pub(crate) fn header_value(raw: &str) -> Result<reqwest::header::HeaderValue, PaymentError> {
    reqwest::header::HeaderValue::from_str(raw).map_err(|_| {
        DomainError::Validation("credential is not a valid HTTP header value".to_string()).into()
    })
}

/// Classifies a reqwest error: a carried HTTP status means the provider
/// responded; anything else (DNS, refused connection, timeout) is a pure
/// network failure reported as 500/NETWORK_ERROR.
pub(crate) fn from_reqwest(err: reqwest::Error) -> GatewayError {
    match err.status() {
        Some(status) => GatewayError::Api {
            status: status.as_u16(),
            code: None,
            message: err.to_string(),
            details: None,
        },
        None => GatewayError::Network {
            message: err.to_string(),
        },
    }
}

/// Best-effort extraction of `message`/`code`/`details` from a provider
/// error body; falls back to the raw body when it is not JSON.
pub(crate) fn api_error_from_body(status: u16, body: &str) -> GatewayError {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()))
        .map(String::from)
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("provider returned HTTP {status}")
            } else {
                body.to_string()
            }
        });
    let code = parsed
        .as_ref()
        .and_then(|v| v.get("code").and_then(|c| c.as_str()))
        .map(String::from);
    let details = parsed.as_ref().and_then(|v| v.get("details")).cloned();

    GatewayError::Api {
        status,
        code,
        message,
        details,
    }
}
