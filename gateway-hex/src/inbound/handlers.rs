//! HTTP request handlers and error mapping.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;

use gateway_types::{
    CheckoutGateway, CollectGateway, CollectRequest, CreatePaymentRequest, Currency, DomainError,
    PaymentError, PaymentId, PaymentWebhookPayload,
};

use crate::service::{CollectService, PaymentService};

/// Application state for checkout-mode deployments.
pub struct CheckoutState<G: CheckoutGateway> {
    pub service: PaymentService<G>,
}

/// Application state for collect-mode deployments.
pub struct CollectState<G: CollectGateway> {
    pub service: CollectService<G>,
}

/// Wrapper to implement IntoResponse for PaymentError (orphan rule workaround).
pub struct ApiError(pub PaymentError);

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match &self.0 {
            PaymentError::Domain(err) => {
                let status = match err {
                    DomainError::PaymentNotFound(_) => StatusCode::NOT_FOUND,
                    DomainError::PaymentExpired(_) => StatusCode::GONE,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, err.code().to_string(), err.to_string(), None)
            }
            PaymentError::Gateway(err) => {
                // 4xx from the provider means our request was invalid and
                // passes through; 5xx and network failures collapse to 502
                // so upstream topology never leaks.
                let status = match err.status_code() {
                    s @ 400..=499 => {
                        StatusCode::from_u16(s).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                    }
                    s if s >= 500 => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (
                    status,
                    err.code().unwrap_or("PAYMENT_GATEWAY_ERROR").to_string(),
                    err.to_string(),
                    err.details().cloned(),
                )
            }
        };

        tracing::error!(%error, %message, "payment error");

        let mut body = serde_json::json!({
            "statusCode": status.as_u16(),
            "error": error,
            "message": message,
            "timestamp": Utc::now().to_rfc3339(),
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Payment webhook stub. Signature verification and event processing are
/// out of scope; the callback is acknowledged and logged only.
/// TODO: verify x-whish-signature once the provider publishes its signing scheme.
pub async fn payment_webhook(
    headers: HeaderMap,
    Json(payload): Json<PaymentWebhookPayload>,
) -> impl IntoResponse {
    let signature = headers
        .get("x-whish-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    tracing::info!(
        payment_id = %payload.payment_id,
        status = %payload.status,
        "received payment webhook"
    );
    tracing::debug!(signature, "webhook signature");

    Json(serde_json::json!({ "received": true }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Checkout mode (ID-addressed)
// ─────────────────────────────────────────────────────────────────────────────

/// Get account balance.
#[tracing::instrument(skip(state))]
pub async fn checkout_balance<G: CheckoutGateway>(
    State(state): State<Arc<CheckoutState<G>>>,
) -> Result<impl IntoResponse, ApiError> {
    let balance = state.service.balance().await?;
    Ok(Json(balance))
}

/// Create a new payment.
#[tracing::instrument(skip(state, req))]
pub async fn create_checkout_payment<G: CheckoutGateway>(
    State(state): State<Arc<CheckoutState<G>>>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.create_payment(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Get payment status by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn checkout_payment_status<G: CheckoutGateway>(
    State(state): State<Arc<CheckoutState<G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.payment_status(PaymentId::new(id)).await?;
    Ok(Json(payment))
}

/// Cancel a payment.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn cancel_checkout_payment<G: CheckoutGateway>(
    State(state): State<Arc<CheckoutState<G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let result = state.service.cancel_payment(PaymentId::new(id)).await?;
    Ok(Json(result))
}

// ─────────────────────────────────────────────────────────────────────────────
// Collect mode (externalId + currency addressed)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CollectStatusQuery {
    pub currency: Currency,
}

/// Get account balance.
#[tracing::instrument(skip(state))]
pub async fn collect_balance<G: CollectGateway>(
    State(state): State<Arc<CollectState<G>>>,
) -> Result<impl IntoResponse, ApiError> {
    let balance = state.service.balance().await?;
    Ok(Json(balance))
}

/// Create a new collect payment.
#[tracing::instrument(skip(state, req))]
pub async fn create_collect_payment<G: CollectGateway>(
    State(state): State<Arc<CollectState<G>>>,
    Json(req): Json<CollectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.service.create_payment(req).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Get payment status by (externalId, currency).
#[tracing::instrument(skip(state))]
pub async fn collect_payment_status<G: CollectGateway>(
    State(state): State<Arc<CollectState<G>>>,
    Path(external_id): Path<i64>,
    Query(query): Query<CollectStatusQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state
        .service
        .payment_status(external_id, query.currency)
        .await?;
    Ok(Json(report))
}
