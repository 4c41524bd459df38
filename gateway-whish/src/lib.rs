//! # Gateway Whish
//!
//! Outbound HTTP adapter for the Whish payment provider.
//!
//! Two incompatible provider contract shapes exist, selected per deployment:
//!
//! - [`WhishCheckoutGateway`] - ID-addressed lifecycle, flat response
//!   bodies, snake_case wire fields, `X-Channel`/`X-Secret` auth headers.
//! - [`WhishCollectGateway`] - externalId+currency addressed lifecycle,
//!   enveloped response bodies, camelCase wire fields,
//!   `channel`/`secret`/`websiteurl` auth headers.
//!
//! Both translate transport failures into the closed `GatewayError` union;
//! neither retries, caches, or keeps state between requests.

pub mod checkout;
pub mod collect;
pub mod config;
pub mod status;
mod transport;
mod wire;

pub use checkout::WhishCheckoutGateway;
pub use collect::WhishCollectGateway;
pub use config::{GatewayMode, WhishConfig};
