//! # Gateway Types
//!
//! Domain types and port traits for the payment gateway service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, Payment, Balance)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto` - Data Transfer Objects for API boundaries
//! - `error` - Domain, gateway and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Balance, Currency, Money, Payment, PaymentId, PaymentStatus};
pub use dto::*;
pub use error::{DomainError, GatewayError, PaymentError};
pub use ports::{CheckoutGateway, CollectGateway};
