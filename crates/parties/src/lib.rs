//! Parties domain module.
//!
//! Only customers exist in this system; suppliers and other party kinds
//! are out of scope.

pub mod customer;

pub use customer::Customer;
