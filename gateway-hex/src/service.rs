//! Payment application services.
//!
//! Thin pass-throughs that convert external-facing request/response shapes
//! to and from the gateway port calls. No infrastructure logic lives here,
//! and nothing is cached or persisted: the provider is the source of truth.

use gateway_types::{
    BalanceResponse, CancelResponse, CheckoutGateway, CollectGateway, CollectRequest,
    CollectSession, CollectStatusReport, CreatePaymentRequest, Currency, DomainError,
    PaymentError, PaymentId, PaymentResponse,
};
use rust_decimal::Decimal;

/// Application service for the ID-addressed checkout mode.
///
/// Generic over `G: CheckoutGateway` - the adapter is injected at compile
/// time, so tests can run against a mock gateway.
pub struct PaymentService<G: CheckoutGateway> {
    gateway: G,
}

impl<G: CheckoutGateway> PaymentService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Gets the current account balance.
    pub async fn balance(&self) -> Result<BalanceResponse, PaymentError> {
        tracing::info!("fetching account balance");
        let balance = self.gateway.balance().await?;
        Ok(balance.into())
    }

    /// Creates a new payment.
    pub async fn create_payment(
        &self,
        req: CreatePaymentRequest,
    ) -> Result<PaymentResponse, PaymentError> {
        ensure_positive_amount(req.amount)?;

        tracing::info!(amount = %req.amount, currency = %req.currency, "creating payment");
        let payment = self.gateway.create_payment(req).await?;
        tracing::info!(payment_id = %payment.id, "payment created");
        Ok(payment.into())
    }

    /// Gets payment status by provider-assigned ID.
    pub async fn payment_status(&self, id: PaymentId) -> Result<PaymentResponse, PaymentError> {
        tracing::info!(payment_id = %id, "fetching payment status");
        let payment = self.gateway.payment_status(&id).await?;
        Ok(payment.into())
    }

    /// Cancels a pending payment.
    pub async fn cancel_payment(&self, id: PaymentId) -> Result<CancelResponse, PaymentError> {
        tracing::info!(payment_id = %id, "cancelling payment");
        let success = self.gateway.cancel_payment(&id).await?;
        Ok(CancelResponse { success })
    }
}

/// Application service for the externalId-addressed collect mode.
pub struct CollectService<G: CollectGateway> {
    gateway: G,
}

impl<G: CollectGateway> CollectService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Gets the current account balance.
    pub async fn balance(&self) -> Result<BalanceResponse, PaymentError> {
        tracing::info!("fetching account balance");
        let balance = self.gateway.balance().await?;
        Ok(balance.into())
    }

    /// Creates a new collect payment.
    pub async fn create_payment(
        &self,
        req: CollectRequest,
    ) -> Result<CollectSession, PaymentError> {
        ensure_positive_amount(req.amount)?;
        // This mode has no optional-URL fallback: all four are mandatory.
        for (field, value) in [
            ("invoice", &req.invoice),
            ("success_callback_url", &req.success_callback_url),
            ("failure_callback_url", &req.failure_callback_url),
            ("success_redirect_url", &req.success_redirect_url),
            ("failure_redirect_url", &req.failure_redirect_url),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("{field} must not be empty")).into());
            }
        }

        tracing::info!(external_id = req.external_id, amount = %req.amount, "creating collect payment");
        let session = self.gateway.create_payment(req).await?;
        tracing::info!(external_id = session.external_id, "collect payment created");
        Ok(session)
    }

    /// Gets payment status by (externalId, currency).
    pub async fn payment_status(
        &self,
        external_id: i64,
        currency: Currency,
    ) -> Result<CollectStatusReport, PaymentError> {
        tracing::info!(external_id, %currency, "fetching collect status");
        self.gateway.collect_status(external_id, currency).await
    }
}

fn ensure_positive_amount(amount: Decimal) -> Result<(), PaymentError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::Validation("amount must be positive".into()).into());
    }
    Ok(())
}
