//! Adapter configuration.

use std::str::FromStr;
use std::time::Duration;

/// Fixed request timeout for every provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable provider configuration, constructed once at process start and
/// handed to the adapter constructor. Never ambient, never mutated.
#[derive(Debug, Clone)]
pub struct WhishConfig {
    pub base_url: String,
    pub channel: String,
    pub secret: String,
    pub website_url: String,
    pub timeout: Duration,
}

impl WhishConfig {
    pub fn new(
        base_url: impl Into<String>,
        channel: impl Into<String>,
        secret: impl Into<String>,
        website_url: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            channel: channel.into(),
            secret: secret.into(),
            website_url: website_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Which provider contract shape this deployment speaks.
///
/// The two modes use incompatible addressing schemes; mixing them would
/// corrupt payment lookups, so the mode is fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    Checkout,
    Collect,
}

impl FromStr for GatewayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "checkout" => Ok(GatewayMode::Checkout),
            "collect" => Ok(GatewayMode::Collect),
            other => Err(format!(
                "unknown gateway mode '{other}', expected 'checkout' or 'collect'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = WhishConfig::new("https://whish.money/", "ch", "sec", "https://shop.example");
        assert_eq!(config.base_url, "https://whish.money");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("checkout".parse::<GatewayMode>(), Ok(GatewayMode::Checkout));
        assert_eq!("Collect".parse::<GatewayMode>(), Ok(GatewayMode::Collect));
        assert!("both".parse::<GatewayMode>().is_err());
    }
}
