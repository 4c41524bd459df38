//! Error types for the payment gateway.

use crate::domain::Currency;

/// Domain-level errors (business rule violations, never transport-related).
///
/// Each variant carries a stable machine code used in API responses and logs.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Payment with ID {0} not found")]
    PaymentNotFound(String),

    #[error("Payment with ID {0} has already been processed")]
    PaymentAlreadyProcessed(String),

    #[error("Payment with ID {0} has expired")]
    PaymentExpired(String),

    #[error("Insufficient balance to process payment")]
    InsufficientBalance,

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Stable machine code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            DomainError::PaymentAlreadyProcessed(_) => "PAYMENT_ALREADY_PROCESSED",
            DomainError::PaymentExpired(_) => "PAYMENT_EXPIRED",
            DomainError::InsufficientBalance => "INSUFFICIENT_BALANCE",
            DomainError::InvalidCurrency(_) => "INVALID_CURRENCY",
            DomainError::NegativeAmount => "NEGATIVE_AMOUNT",
            DomainError::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            DomainError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Provider/transport failures, produced exclusively by the transport
/// boundary in the adapter crate.
///
/// A closed tagged union: downstream code matches on the variant instead
/// of probing an opaque error object for a response.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The provider returned a response, either a non-2xx HTTP status or a
    /// logical failure signaled inside the response envelope.
    #[error("Provider error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// No response was received (DNS failure, connection refused, timeout).
    #[error("Network error: {message}")]
    Network { message: String },
}

impl GatewayError {
    /// Upstream HTTP status, or 500 for a pure transport failure.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Api { status, .. } => *status,
            GatewayError::Network { .. } => 500,
        }
    }

    /// Machine code when the provider supplied one; network failures
    /// always report `NETWORK_ERROR`.
    pub fn code(&self) -> Option<&str> {
        match self {
            GatewayError::Api { code, .. } => code.as_deref(),
            GatewayError::Network { .. } => Some("NETWORK_ERROR"),
        }
    }

    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            GatewayError::Api { details, .. } => details.as_ref(),
            GatewayError::Network { .. } => None,
        }
    }
}

/// Application-level error: the sum of the two disjoint failure families.
///
/// Port methods return this so a provider 404 can surface as a domain
/// not-found while everything transport-shaped stays a gateway error.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_codes_are_stable() {
        assert_eq!(
            DomainError::PaymentNotFound("pay_1".into()).code(),
            "PAYMENT_NOT_FOUND"
        );
        assert_eq!(
            DomainError::PaymentExpired("pay_1".into()).code(),
            "PAYMENT_EXPIRED"
        );
        assert_eq!(DomainError::InsufficientBalance.code(), "INSUFFICIENT_BALANCE");
        assert_eq!(
            DomainError::InvalidCurrency("EUR".into()).code(),
            "INVALID_CURRENCY"
        );
        assert_eq!(
            DomainError::PaymentAlreadyProcessed("pay_1".into()).code(),
            "PAYMENT_ALREADY_PROCESSED"
        );
    }

    #[test]
    fn test_network_error_defaults() {
        let err = GatewayError::Network {
            message: "connection refused".into(),
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.code(), Some("NETWORK_ERROR"));
        assert!(err.details().is_none());
    }

    #[test]
    fn test_api_error_accessors() {
        let err = GatewayError::Api {
            status: 422,
            code: Some("ERR1".into()),
            message: "insufficient funds".into(),
            details: Some(serde_json::json!({"field": "amount"})),
        };
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.code(), Some("ERR1"));
        assert!(err.details().is_some());
    }
}
