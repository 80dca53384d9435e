//! Counterparty (buyer) identity as captured on a document.

use serde::{Deserialize, Serialize};

use crate::gstin::Gstin;

/// The buyer side of a document.
///
/// `tax_id` is the registration identifier exactly as entered — possibly
/// empty, possibly malformed. Classification reads its raw prefix and falls
/// back to the same-state policy for unusable values, so a typo never blocks
/// a live total. Strict validation is available separately for the layer
/// that persists parties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    pub name: String,
    #[serde(default)]
    pub tax_id: String,
}

impl Counterparty {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
        }
    }

    /// Unregistered buyer (walk-in customer).
    pub fn unregistered(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: String::new(),
        }
    }

    /// Full-format validation of the captured tax identifier.
    ///
    /// Returns `None` for empty or malformed identifiers; totals computation
    /// does not depend on this.
    pub fn validated_gstin(&self) -> Option<Gstin> {
        Gstin::parse(&self.tax_id).ok()
    }
}
