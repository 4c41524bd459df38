//! Provider wire types.
//!
//! Field names here are provider contract details and must stay byte-exact:
//! the collect API uses camelCase, the checkout API uses snake_case. They
//! are separate types on purpose; do not unify them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use gateway_types::GatewayError;

/// Converts a provider JSON number into a Decimal. JSON numbers are always
/// finite, so the fallback to zero is unreachable in practice.
pub(crate) fn decimal_from_wire(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Converts a domain Decimal into the JSON number the provider expects.
pub(crate) fn decimal_to_wire(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────
// Collect API (enveloped, camelCase)
// ─────────────────────────────────────────────────────────────────────────────

/// Generic response wrapper of the collect API.
///
/// `status: false` inside an HTTP 200 is a logical failure; `dialog`
/// carries the human message and `code` the machine code.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub dialog: Option<String>,
    // the envelope also carries `actions` and `extra`; ignored here.
    // `Option::default` keeps serde's derive from demanding `T: Default`.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, turning a logical failure into a gateway error.
    /// The provider does not attach an HTTP status to logical failures, so
    /// they are reported as upstream 400s.
    pub fn into_data(self) -> Result<T, GatewayError> {
        if !self.status {
            return Err(GatewayError::Api {
                status: 400,
                code: self.code,
                message: self.dialog.unwrap_or_else(|| "generic error".to_string()),
                details: None,
            });
        }
        self.data.ok_or_else(|| GatewayError::Api {
            status: 400,
            code: None,
            message: "provider envelope missing data".to_string(),
            details: None,
        })
    }
}

/// POST /itel-service/api/payment/whish
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectPaymentRequest {
    pub amount: f64,
    pub currency: String,
    pub invoice: String,
    pub external_id: i64,
    pub success_callback_url: String,
    pub failure_callback_url: String,
    pub success_redirect_url: String,
    pub failure_redirect_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectPaymentData {
    pub collect_url: String,
}

/// POST /itel-service/api/payment/collect/status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectStatusRequest {
    pub currency: String,
    pub external_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectStatusData {
    pub collect_status: String,
    pub payer_phone_number: String,
}

/// GET /itel-service/api/payment/account/balance
#[derive(Debug, Deserialize)]
pub struct CollectBalanceData {
    pub balance: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Checkout API (flat bodies, snake_case)
// ─────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/payment
#[derive(Debug, Serialize)]
pub struct CheckoutCreateRequest {
    pub amount: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_minutes: Option<i64>,
}

/// Payment resource as the checkout API returns it.
#[derive(Debug, Deserialize)]
pub struct CheckoutPaymentResource {
    pub id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub payment_url: String,
    #[serde(default)]
    pub merchant_reference: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Balance resource of the checkout API.
#[derive(Debug, Deserialize)]
pub struct CheckoutBalanceResource {
    pub available: f64,
    pub pending: f64,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
}

/// POST /api/v1/payment/{id}/cancel
#[derive(Debug, Deserialize)]
pub struct CheckoutCancelResource {
    pub success: bool,
}
