//! # Gateway Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the Whish adapter for the configured mode
//! - Create the application service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_hex::{CollectService, PaymentService, inbound::HttpServer};
use gateway_whish::{GatewayMode, WhishCheckoutGateway, WhishCollectGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gateway_app=debug,gateway_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting payment gateway on port {}", config.port);
    tracing::info!("Provider base URL: {}", config.whish.base_url);
    tracing::info!("Gateway mode: {:?}", config.mode);

    // The mode fixes the provider contract shape for the whole deployment;
    // the two addressing schemes are never mixed.
    let server = match config.mode {
        GatewayMode::Checkout => {
            let gateway = WhishCheckoutGateway::new(config.whish)?;
            HttpServer::checkout(PaymentService::new(gateway))
        }
        GatewayMode::Collect => {
            let gateway = WhishCollectGateway::new(config.whish)?;
            HttpServer::collect(CollectService::new(gateway))
        }
    };

    let addr = format!("0.0.0.0:{}", config.port);
    server.run(&addr).await?;

    Ok(())
}
