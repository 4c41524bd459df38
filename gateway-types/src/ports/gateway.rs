//! Payment gateway ports.
//!
//! Two mutually exclusive deployment modes of the provider contract exist:
//! an ID-addressed checkout lifecycle and an externalId+currency addressed
//! collect lifecycle. They use incompatible keying schemes, so they are
//! modeled as two distinct traits selected at configuration time, never as
//! runtime polymorphism over a single merged interface.

use crate::domain::{Balance, Currency, Payment, PaymentId};
use crate::dto::{CollectRequest, CollectSession, CollectStatusReport, CreatePaymentRequest};
use crate::error::PaymentError;

/// Port for the ID-addressed checkout contract (Mode A).
#[async_trait::async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Gets the current provider account balance.
    async fn balance(&self) -> Result<Balance, PaymentError>;

    /// Creates a payment at the provider and returns it with its hosted
    /// checkout URL. Not idempotent; callers should supply a unique
    /// merchant reference per attempt.
    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, PaymentError>;

    /// Looks up a payment by its provider-assigned ID. A provider 404
    /// surfaces as `DomainError::PaymentNotFound`.
    async fn payment_status(&self, id: &PaymentId) -> Result<Payment, PaymentError>;

    /// Cancels a payment. Returns true only when the provider acknowledges
    /// the cancellation; transport failures propagate as errors and are
    /// never collapsed into `false`.
    async fn cancel_payment(&self, id: &PaymentId) -> Result<bool, PaymentError>;
}

/// Port for the externalId+currency addressed collect contract (Mode B).
#[async_trait::async_trait]
pub trait CollectGateway: Send + Sync {
    /// Gets the current provider account balance.
    async fn balance(&self) -> Result<Balance, PaymentError>;

    /// Creates a collect payment and returns the hosted collect URL
    /// together with the caller's external ID.
    async fn create_payment(&self, req: CollectRequest) -> Result<CollectSession, PaymentError>;

    /// Queries the payment outcome keyed by (externalId, currency).
    /// A pure read; repeatable.
    async fn collect_status(
        &self,
        external_id: i64,
        currency: Currency,
    ) -> Result<CollectStatusReport, PaymentError>;
}
