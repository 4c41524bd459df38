//! Checkout-mode adapter (Mode A).
//!
//! Speaks the flat checkout API: response bodies are the typed resources
//! themselves and the HTTP status alone signals success. Payments are
//! addressed by the provider-assigned ID, and provider status strings go
//! through the fixed normalization table.

use reqwest::header::HeaderMap;

use gateway_types::{
    Balance, CheckoutGateway, CreatePaymentRequest, DomainError, GatewayError, Payment, PaymentError,
    PaymentId,
};

use crate::config::WhishConfig;
use crate::status::normalize_status;
use crate::transport;
use crate::wire::{
    CheckoutBalanceResource, CheckoutCancelResource, CheckoutCreateRequest,
    CheckoutPaymentResource, decimal_from_wire, decimal_to_wire,
};

const BALANCE_PATH: &str = "/api/v1/payment/balance";
const PAYMENT_PATH: &str = "/api/v1/payment";

/// Whish checkout API adapter.
pub struct WhishCheckoutGateway {
    http: reqwest::Client,
    base_url: String,
    auth: HeaderMap,
}

impl WhishCheckoutGateway {
    pub fn new(config: WhishConfig) -> Result<Self, PaymentError> {
        let http = transport::build_client(&config)?;
        // The checkout API uses X-prefixed auth headers and no website URL.
        let mut auth = HeaderMap::new();
        auth.insert("X-Channel", transport::header_value(&config.channel)?);
        auth.insert("X-Secret", transport::header_value(&config.secret)?);
        Ok(Self {
            http,
            base_url: config.base_url,
            auth,
        })
    }

    fn auth_headers(&self) -> HeaderMap {
        self.auth.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_payment(&self, resource: CheckoutPaymentResource) -> Result<Payment, PaymentError> {
        let currency = resource.currency.parse()?;
        let payment = Payment::new(
            PaymentId::new(resource.id),
            decimal_from_wire(resource.amount),
            currency,
            normalize_status(&resource.status),
            resource.payment_url,
            resource.merchant_reference,
            resource.created_at,
            resource.expires_at,
        )?;
        Ok(payment)
    }
}

/// Rewrites a provider 404 into the domain not-found error; every other
/// failure stays in the gateway family.
fn map_not_found(err: GatewayError, id: &PaymentId) -> PaymentError {
    match err {
        GatewayError::Api { status: 404, .. } => {
            DomainError::PaymentNotFound(id.as_str().to_string()).into()
        }
        other => other.into(),
    }
}

#[async_trait::async_trait]
impl CheckoutGateway for WhishCheckoutGateway {
    async fn balance(&self) -> Result<Balance, PaymentError> {
        tracing::debug!("GET {BALANCE_PATH}");
        let resource: CheckoutBalanceResource = transport::execute(
            self.http
                .get(self.url(BALANCE_PATH))
                .headers(self.auth_headers()),
        )
        .await?;

        Ok(Balance::new(
            decimal_from_wire(resource.available),
            decimal_from_wire(resource.pending),
            resource.currency,
            resource.last_updated,
        ))
    }

    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, PaymentError> {
        tracing::debug!(amount = %req.amount, currency = %req.currency, "POST {PAYMENT_PATH}");
        let payload = CheckoutCreateRequest {
            amount: decimal_to_wire(req.amount),
            currency: req.currency.code().to_string(),
            description: req.description,
            merchant_reference: req.merchant_reference,
            customer_email: req.customer_email,
            customer_phone: req.customer_phone,
            redirect_url: req.redirect_url,
            webhook_url: req.webhook_url,
            expires_in_minutes: req.expires_in_minutes,
        };

        let resource: CheckoutPaymentResource = transport::execute(
            self.http
                .post(self.url(PAYMENT_PATH))
                .headers(self.auth_headers())
                .json(&payload),
        )
        .await?;

        self.map_payment(resource)
    }

    async fn payment_status(&self, id: &PaymentId) -> Result<Payment, PaymentError> {
        tracing::debug!(payment_id = %id, "GET {PAYMENT_PATH}/{{id}}");
        let resource: CheckoutPaymentResource = transport::execute(
            self.http
                .get(self.url(&format!("{PAYMENT_PATH}/{id}")))
                .headers(self.auth_headers()),
        )
        .await
        .map_err(|err| map_not_found(err, id))?;

        self.map_payment(resource)
    }

    async fn cancel_payment(&self, id: &PaymentId) -> Result<bool, PaymentError> {
        tracing::debug!(payment_id = %id, "POST {PAYMENT_PATH}/{{id}}/cancel");
        let resource: CheckoutCancelResource = transport::execute(
            self.http
                .post(self.url(&format!("{PAYMENT_PATH}/{id}/cancel")))
                .headers(self.auth_headers()),
        )
        .await
        .map_err(|err| map_not_found(err, id))?;

        Ok(resource.success)
    }
}
