//! Products domain module.
//!
//! A product carries both its catalog data (name, unit price) and its live
//! stock level. There is no separate warehouse model in this system; the
//! inventory *is* the product collection.

pub mod product;

pub use product::Product;
