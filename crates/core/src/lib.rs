//! `gstbill-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! fixed-point money, tax rates, quantities, typed identifiers, and the shared
//! error model.

pub mod error;
pub mod id;
pub mod money;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use id::{DocumentId, ProductRef};
pub use money::Money;
pub use types::{Quantity, TaxRate};
