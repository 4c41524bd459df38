//! Domain models for the payment gateway.

pub mod balance;
pub mod money;
pub mod payment;

pub use balance::Balance;
pub use money::{Currency, Money};
pub use payment::{Payment, PaymentId, PaymentStatus};
