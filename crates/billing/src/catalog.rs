//! Catalog lookup seam.
//!
//! The product catalog lives outside this workspace (it is persistence-owned
//! data); billing only needs its default rate pair to prefill a fresh line
//! the way the product picker does. The trait keeps that dependency pointed
//! outward, with an in-memory implementation for tests.

use std::collections::HashMap;

use gstbill_core::{Money, ProductRef, Quantity, TaxRate};
use gstbill_tax::LineItem;

/// Default amounts a catalog entry carries for line prefill.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineDefaults {
    pub unit_rate: Money,
    pub tax_rate: TaxRate,
}

/// External catalog lookup.
pub trait Catalog {
    /// Default unit rate and tax rate for `product`, if it exists.
    fn line_defaults(&self, product: ProductRef) -> Option<LineDefaults>;
}

/// Build a line from catalog defaults. Returns `None` for unknown products;
/// the caller decides whether that is an error.
pub fn prefill_line(
    catalog: &impl Catalog,
    product: ProductRef,
    quantity: Quantity,
) -> Option<LineItem> {
    let defaults = catalog.line_defaults(product)?;
    Some(LineItem {
        product,
        quantity,
        unit_rate: defaults.unit_rate,
        tax_rate: defaults.tax_rate,
    })
}

/// In-memory catalog for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    entries: HashMap<ProductRef, LineDefaults>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: ProductRef, defaults: LineDefaults) {
        self.entries.insert(product, defaults);
    }
}

impl Catalog for InMemoryCatalog {
    fn line_defaults(&self, product: ProductRef) -> Option<LineDefaults> {
        self.entries.get(&product).copied()
    }
}
