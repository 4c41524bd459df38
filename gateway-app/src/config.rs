//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use gateway_whish::{GatewayMode, WhishConfig};

/// Application configuration, loaded once at process start.
pub struct Config {
    pub port: u16,
    pub mode: GatewayMode,
    pub whish: WhishConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let mode = env::var("GATEWAY_MODE")
            .unwrap_or_else(|_| "collect".to_string())
            .parse::<GatewayMode>()
            .map_err(anyhow::Error::msg)?;

        let base_url =
            env::var("WHISH_BASE_URL").unwrap_or_else(|_| "https://whish.money".to_string());
        let channel = env::var("WHISH_CHANNEL")
            .map_err(|_| anyhow::anyhow!("WHISH_CHANNEL environment variable is required"))?;
        let secret = env::var("WHISH_SECRET")
            .map_err(|_| anyhow::anyhow!("WHISH_SECRET environment variable is required"))?;
        let website_url = env::var("WHISH_WEBSITE_URL").unwrap_or_default();

        let mut whish = WhishConfig::new(base_url, channel, secret, website_url);
        if let Ok(secs) = env::var("WHISH_TIMEOUT_SECS") {
            whish = whish.with_timeout(Duration::from_secs(secs.parse()?));
        }

        Ok(Self { port, mode, whish })
    }
}
