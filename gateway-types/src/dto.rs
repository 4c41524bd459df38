//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Balance, Currency, Payment, PaymentId, PaymentStatus};

// ─────────────────────────────────────────────────────────────────────────────
// Checkout mode (ID-addressed lifecycle)
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a hosted-checkout payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    /// Amount in major units, must be positive
    pub amount: Decimal,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Caller-chosen reference; supply a unique one per attempt, the
    /// provider does not document deduplication
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

/// Payment representation returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub amount: Decimal,
    pub currency: Currency,
    pub status: PaymentStatus,
    pub payment_url: String,
    pub merchant_reference: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            amount: payment.amount,
            currency: payment.currency,
            status: payment.status,
            payment_url: payment.payment_url,
            merchant_reference: payment.merchant_reference,
            created_at: payment.created_at,
            expires_at: payment.expires_at,
        }
    }
}

/// Response after a cancel request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelResponse {
    pub success: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Collect mode (externalId + currency addressed lifecycle)
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a collect payment.
///
/// All four callback/redirect URLs are mandatory in this mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectRequest {
    /// Amount in major units, must be positive
    pub amount: Decimal,
    pub currency: Currency,
    /// Free-text description shown on the collect page
    pub invoice: String,
    /// Caller-chosen unique ID correlating to the caller's own record
    pub external_id: i64,
    pub success_callback_url: String,
    pub failure_callback_url: String,
    pub success_redirect_url: String,
    pub failure_redirect_url: String,
}

/// Result of creating a collect payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectSession {
    pub collect_url: String,
    pub external_id: i64,
}

/// Collect-mode payment outcome as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectStatus {
    Success,
    Failed,
    Pending,
}

/// Result of a collect status query, keyed by (externalId, currency).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectStatusReport {
    pub collect_status: CollectStatus,
    pub payer_phone_number: String,
    pub external_id: i64,
    pub currency: Currency,
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared
// ─────────────────────────────────────────────────────────────────────────────

/// Balance representation returned to API callers.
///
/// `total` is computed from the entity at conversion time, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub available: Decimal,
    pub pending: Decimal,
    pub total: Decimal,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
}

impl From<Balance> for BalanceResponse {
    fn from(balance: Balance) -> Self {
        Self {
            total: balance.total(),
            available: balance.available,
            pending: balance.pending,
            currency: balance.currency,
            last_updated: balance.last_updated,
        }
    }
}

/// Payload of the provider's payment webhook. Signature verification and
/// event processing are out of scope; the inbound handler only logs this.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWebhookPayload {
    pub payment_id: String,
    pub status: String,
    pub amount: Decimal,
    pub currency: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_reference: Option<String>,
}
