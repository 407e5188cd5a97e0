//! Invoicing domain module.
//!
//! An invoice is built through an [`InvoiceDraft`] and becomes immutable
//! once committed. Lines hold product snapshots, so a committed invoice is
//! a historical record: later price or stock changes never touch it.

pub mod invoice;

pub use invoice::{Invoice, InvoiceDraft, LineItem};
