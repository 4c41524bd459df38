//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use gateway_types::{CheckoutGateway, CollectGateway};

use super::handlers::{self, CheckoutState, CollectState};
use crate::service::{CollectService, PaymentService};

/// HTTP server for the payment gateway API.
///
/// The route set is fixed by the deployment mode when the server is built;
/// the two addressing schemes are never mixed in one router.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Builds the server for a checkout-mode (ID-addressed) deployment.
    pub fn checkout<G: CheckoutGateway + 'static>(service: PaymentService<G>) -> Self {
        let state = Arc::new(CheckoutState { service });
        let router = Router::new()
            .route("/health", get(handlers::health))
            .route("/payments/balance", get(handlers::checkout_balance::<G>))
            .route("/payments", post(handlers::create_checkout_payment::<G>))
            .route(
                "/payments/{id}/status",
                get(handlers::checkout_payment_status::<G>),
            )
            .route(
                "/payments/{id}/cancel",
                post(handlers::cancel_checkout_payment::<G>),
            )
            .route("/webhooks/payment", post(handlers::payment_webhook))
            .layer(TraceLayer::new_for_http())
            .with_state(state);
        Self { router }
    }

    /// Builds the server for a collect-mode (externalId-addressed) deployment.
    pub fn collect<G: CollectGateway + 'static>(service: CollectService<G>) -> Self {
        let state = Arc::new(CollectState { service });
        let router = Router::new()
            .route("/health", get(handlers::health))
            .route("/payments/balance", get(handlers::collect_balance::<G>))
            .route("/payments", post(handlers::create_collect_payment::<G>))
            .route(
                "/payments/{external_id}/status",
                get(handlers::collect_payment_status::<G>),
            )
            .route("/webhooks/payment", post(handlers::payment_webhook))
            .layer(TraceLayer::new_for_http())
            .with_state(state);
        Self { router }
    }

    /// Returns the Axum router (for tests and embedding).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
