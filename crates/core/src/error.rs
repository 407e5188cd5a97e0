//! Domain error model.

use thiserror::Error;

use crate::id::{CustomerId, ProductId};

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (lookups, stock
/// checks, validation). Console concerns like an unknown menu choice are
/// handled at the input boundary, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// No customer with the given id exists.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// No product with the given id exists.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The requested sale quantity exceeds the current stock level.
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// A monetary computation exceeded the representable range.
    #[error("amount overflow")]
    AmountOverflow,

    /// An identifier was invalid (e.g. parse failure, zero).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value failed validation (e.g. empty name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl BillingError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn insufficient_stock(product_id: ProductId, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            product_id,
            requested,
            available,
        }
    }
}
