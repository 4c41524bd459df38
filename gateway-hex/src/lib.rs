//! # Gateway Hex
//!
//! Application service layer and HTTP adapter for the payment gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application services (thin orchestration over the ports)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The services are generic over the gateway port traits, so the concrete
//! provider adapter is injected at compile time and tests run against mock
//! gateways.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{CollectService, PaymentService};
