//! Billing orchestration.
//!
//! [`Billing`] owns every mutable collection in the system and is the only
//! code allowed to move stock. Input adapters (the console, tests) call
//! its explicit operations and map the returned errors to messages; the
//! orchestrator itself does no I/O.

pub mod billing;

pub use billing::Billing;
