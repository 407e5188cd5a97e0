//! `billforge-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no rendering
//! beyond `Display`).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{BillingError, BillingResult};
pub use id::{CustomerId, IdSeq, InvoiceId, ProductId};
pub use money::Money;
pub use value_object::ValueObject;
