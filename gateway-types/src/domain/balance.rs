//! Provider account balance.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account balance as reported by the provider.
///
/// Never persisted; recomputed on every query. `total` is always derived,
/// there is no stored total field to drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub available: Decimal,
    pub pending: Decimal,
    pub currency: String,
    pub last_updated: DateTime<Utc>,
}

impl Balance {
    pub fn new(
        available: Decimal,
        pending: Decimal,
        currency: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            available,
            pending,
            currency: currency.into(),
            last_updated,
        }
    }

    /// Available plus pending funds.
    pub fn total(&self) -> Decimal {
        self.available + self.pending
    }

    /// True when the available funds cover `amount`.
    pub fn has_available_funds(&self, amount: Decimal) -> bool {
        self.available >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_is_derived() {
        let balance = Balance::new(dec!(100), dec!(20), "LBP", Utc::now());
        assert_eq!(balance.total(), dec!(120));
    }

    #[test]
    fn test_has_available_funds() {
        let balance = Balance::new(dec!(50), dec!(0), "USD", Utc::now());
        assert!(balance.has_available_funds(dec!(50)));
        assert!(!balance.has_available_funds(dec!(50.01)));
    }
}
