//! Billing document model.
//!
//! Invoices and orders share one tax shape: an immutable [`Document`] value
//! holding ordered line items and the buyer identity. Editing produces a new
//! value and totals are recomputed in full on every edit — the mutable
//! editing buffer belongs to the caller, never to this crate.

pub mod catalog;
pub mod config;
pub mod document;

pub use catalog::{Catalog, InMemoryCatalog, LineDefaults, prefill_line};
pub use config::SellerProfile;
pub use document::{Document, DocumentKind, DocumentTotals};
