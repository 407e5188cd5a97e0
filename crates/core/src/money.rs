//! Monetary amounts.
//!
//! Amounts are stored in the smallest currency unit (e.g., cents) so that
//! totals are exact; there is no floating point anywhere in the money path.

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};
use crate::value_object::ValueObject;

/// Amount in smallest currency unit (e.g., cents).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build an amount from major/minor units, e.g. `Money::new(25, 50)`
    /// for 25.50. `minor` must be below 100.
    pub fn new(major: u64, minor: u64) -> Self {
        debug_assert!(minor < 100, "minor units must be < 100");
        Self(major * 100 + minor)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Line-total multiplication; overflow is a domain error, not a panic.
    pub fn checked_mul(self, quantity: u32) -> BillingResult<Money> {
        self.0
            .checked_mul(quantity as u64)
            .map(Money)
            .ok_or(BillingError::AmountOverflow)
    }

    pub fn checked_add(self, other: Money) -> BillingResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(BillingError::AmountOverflow)
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Through `pad` so width/alignment flags work in table rows.
        f.pad(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_major_and_minor_units() {
        assert_eq!(Money::from_cents(200_000).to_string(), "2000.00");
        assert_eq!(Money::new(25, 50).to_string(), "25.50");
        assert_eq!(Money::new(45, 0).to_string(), "45.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn checked_mul_accumulates_line_totals() {
        let price = Money::new(1000, 0);
        assert_eq!(price.checked_mul(2).unwrap(), Money::from_cents(200_000));
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        let price = Money::from_cents(u64::MAX);
        assert_eq!(price.checked_mul(2), Err(BillingError::AmountOverflow));
        assert_eq!(
            price.checked_add(Money::from_cents(1)),
            Err(BillingError::AmountOverflow)
        );
    }

    #[test]
    fn serializes_as_raw_cents() {
        assert_eq!(serde_json::to_string(&Money::new(25, 50)).unwrap(), "2550");
    }
}
