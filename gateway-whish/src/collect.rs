//! Collect-mode adapter (Mode B).
//!
//! Speaks the enveloped collect API: every response is wrapped in
//! `{status, code, dialog, data}` and a `status: false` inside an HTTP 200
//! is a logical failure. Payments are addressed by the caller's
//! (externalId, currency) pair; the provider never hands out its own ID.

use chrono::Utc;
use reqwest::header::HeaderMap;
use rust_decimal::Decimal;

use gateway_types::{
    Balance, CollectGateway, CollectRequest, CollectSession, CollectStatus, CollectStatusReport,
    Currency, PaymentError,
};

use crate::config::WhishConfig;
use crate::transport;
use crate::wire::{
    CollectBalanceData, CollectPaymentData, CollectPaymentRequest, CollectStatusData,
    CollectStatusRequest, Envelope, decimal_to_wire,
};

const BALANCE_PATH: &str = "/itel-service/api/payment/account/balance";
const CREATE_PATH: &str = "/itel-service/api/payment/whish";
const STATUS_PATH: &str = "/itel-service/api/payment/collect/status";

/// Whish collect API adapter.
pub struct WhishCollectGateway {
    http: reqwest::Client,
    base_url: String,
    auth: HeaderMap,
}

impl WhishCollectGateway {
    pub fn new(config: WhishConfig) -> Result<Self, PaymentError> {
        let http = transport::build_client(&config)?;
        // The collect API authenticates with bare lowercase header names.
        let mut auth = HeaderMap::new();
        auth.insert("channel", transport::header_value(&config.channel)?);
        auth.insert("secret", transport::header_value(&config.secret)?);
        auth.insert("websiteurl", transport::header_value(&config.website_url)?);
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
}

#[async_trait::async_trait]
impl CollectGateway for WhishCollectGateway {
    async fn balance(&self) -> Result<Balance, PaymentError> {
        tracing::debug!("GET {BALANCE_PATH}");
        let envelope: Envelope<CollectBalanceData> = transport::execute(
            self.http
                .get(self.url(BALANCE_PATH))
                .headers(self.auth_headers()),
        )
        .await?;
        let data = envelope.into_data()?;

        // The collect balance endpoint reports a single LBP figure with no
        // pending bucket.
        Ok(Balance::new(
            crate::wire::decimal_from_wire(data.balance),
            Decimal::ZERO,
            "LBP",
            Utc::now(),
        ))
    }

    async fn create_payment(&self, req: CollectRequest) -> Result<CollectSession, PaymentError> {
        tracing::debug!(external_id = req.external_id, "POST {CREATE_PATH}");
        let payload = CollectPaymentRequest {
            amount: decimal_to_wire(req.amount),
            currency: req.currency.code().to_string(),
            invoice: req.invoice,
            external_id: req.external_id,
            success_callback_url: req.success_callback_url,
            failure_callback_url: req.failure_callback_url,
            success_redirect_url: req.success_redirect_url,
            failure_redirect_url: req.failure_redirect_url,
        };

        let envelope: Envelope<CollectPaymentData> = transport::execute(
            self.http
                .post(self.url(CREATE_PATH))
                .headers(self.auth_headers())
                .json(&payload),
        )
        .await?;
        let data = envelope.into_data()?;

        Ok(CollectSession {
            collect_url: data.collect_url,
            external_id: req.external_id,
        })
    }

    async fn collect_status(
        &self,
        external_id: i64,
        currency: Currency,
    ) -> Result<CollectStatusReport, PaymentError> {
        tracing::debug!(external_id, %currency, "POST {STATUS_PATH}");
        let payload = CollectStatusRequest {
            currency: currency.code().to_string(),
            external_id,
        };

        let envelope: Envelope<CollectStatusData> = transport::execute(
            self.http
                .post(self.url(STATUS_PATH))
                .headers(self.auth_headers())
                .json(&payload),
        )
        .await?;
        let data = envelope.into_data()?;

        Ok(CollectStatusReport {
            collect_status: parse_collect_status(&data.collect_status),
            payer_phone_number: data.payer_phone_number,
            external_id,
            currency,
        })
    }
}

/// The collect API reports `success|failed|pending`; anything else fails
/// open to pending, same policy as the checkout status table.
fn parse_collect_status(raw: &str) -> CollectStatus {
    match raw.to_ascii_lowercase().as_str() {
        "success" => CollectStatus::Success,
        "failed" => CollectStatus::Failed,
        "pending" => CollectStatus::Pending,
        other => {
            tracing::warn!(collect_status = other, "unmapped collect status, defaulting to pending");
            CollectStatus::Pending
        }
    }
}
