//! Strongly-typed identifiers used across the domain.
//!
//! Ids are small positive integers handed out sequentially per collection
//! by an [`IdSeq`]. Deriving an id from the current collection length is
//! deliberately not supported: it collides as soon as entries can be
//! removed.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// Identifier of a product in the inventory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

/// Identifier of a customer in the directory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u32);

/// Identifier of a committed (or in-progress) invoice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(u32);

macro_rules! impl_sequential_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw id value. Allocation goes through [`IdSeq`];
            /// this is for lookups and tests.
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u32> for $t {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = BillingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: u32 = s
                    .trim()
                    .parse()
                    .map_err(|e| BillingError::invalid_id(format!("{}: {}", $name, e)))?;
                if value == 0 {
                    return Err(BillingError::invalid_id(concat!($name, ": must be positive")));
                }
                Ok(Self(value))
            }
        }
    };
}

impl_sequential_id!(ProductId, "ProductId");
impl_sequential_id!(CustomerId, "CustomerId");
impl_sequential_id!(InvoiceId, "InvoiceId");

/// Monotonic id allocator.
///
/// The first id handed out is 1; values are never reused, regardless of
/// what happens to the entities they were assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSeq {
    next: u32,
}

impl IdSeq {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next raw id value and advances the sequence.
    pub fn next_value(&mut self) -> u32 {
        let value = self.next;
        self.next += 1;
        value
    }

    /// The value the next call to [`IdSeq::next_value`] would return.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for IdSeq {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_seq_starts_at_one_and_increments() {
        let mut seq = IdSeq::new();
        assert_eq!(seq.next_value(), 1);
        assert_eq!(seq.next_value(), 2);
        assert_eq!(seq.next_value(), 3);
        assert_eq!(seq.peek(), 4);
    }

    #[test]
    fn parse_rejects_zero_and_garbage() {
        assert!("7".parse::<ProductId>().is_ok());
        assert!(matches!(
            "0".parse::<CustomerId>(),
            Err(BillingError::InvalidId(_))
        ));
        assert!(matches!(
            "laptop".parse::<InvoiceId>(),
            Err(BillingError::InvalidId(_))
        ));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = ProductId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }
}
