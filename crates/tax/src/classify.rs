//! Transaction classification: intra-state, inter-state, or unknown.

use serde::{Deserialize, Serialize};

use gstbill_parties::StateCode;

/// Jurisdiction relationship between seller and buyer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionClass {
    /// Buyer registered in the seller's state: tax splits into CGST + SGST.
    Intra,
    /// Buyer registered in another state: tax goes to IGST as one component.
    Inter,
    /// Buyer state could not be read from the identifier.
    ///
    /// Deliberate policy, not an accident: an unreadable buyer identifier is
    /// billed as a same-state sale, so `Unknown` must be treated identically
    /// to `Intra` by every consumer.
    Unknown,
}

impl TransactionClass {
    /// Whether tax splits into the two local components (CGST + SGST).
    pub const fn splits_locally(&self) -> bool {
        matches!(self, Self::Intra | Self::Unknown)
    }
}

/// Classify a transaction from the seller's registration state and the
/// buyer's tax registration identifier **as entered**.
///
/// The buyer state is the first two characters of the identifier. Fewer than
/// two characters means the state cannot be read and yields
/// [`TransactionClass::Unknown`]. No other validation happens here — a
/// garbled-but-long-enough identifier compares like any other prefix, which
/// matches how the billing screen has always behaved. Strict GSTIN format
/// checks belong to the parties layer.
pub fn classify_transaction(seller: StateCode, buyer_tax_id: &str) -> TransactionClass {
    let mut prefix = buyer_tax_id.chars();
    let (Some(a), Some(b)) = (prefix.next(), prefix.next()) else {
        return TransactionClass::Unknown;
    };

    let seller = seller.as_str().as_bytes();
    if a == seller[0] as char && b == seller[1] as char {
        TransactionClass::Intra
    } else {
        TransactionClass::Inter
    }
}
