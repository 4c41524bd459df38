//! Payment entity and status lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Currency;
use crate::error::DomainError;

/// Provider-assigned opaque payment identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PaymentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Domain-side payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
    Expired,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// A payment as reported by the provider.
///
/// Built exclusively by the gateway adapter from provider responses and
/// never mutated locally; the provider remains the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
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

impl Payment {
    /// Creates a payment, enforcing that the expiry window is not inverted.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PaymentId,
        amount: Decimal,
        currency: Currency,
        status: PaymentStatus,
        payment_url: impl Into<String>,
        merchant_reference: impl Into<String>,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        if amount.is_sign_negative() {
            return Err(DomainError::NegativeAmount);
        }
        if let Some(expiry) = expires_at
            && expiry < created_at
        {
            return Err(DomainError::Validation(format!(
                "payment {id} expires before it was created"
            )));
        }
        Ok(Self {
            id,
            amount,
            currency,
            status,
            payment_url: payment_url.into(),
            merchant_reference: merchant_reference.into(),
            created_at,
            expires_at,
        })
    }

    /// True once `now` has passed the expiry timestamp; false when unset.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expiry) => Utc::now() > expiry,
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    pub fn is_completed(&self) -> bool {
        self.status == PaymentStatus::Completed
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Failed
    }
}
