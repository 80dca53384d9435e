//! Tax computation and aggregation core.
//!
//! Given line items and a seller/buyer jurisdiction pair, this crate computes
//! per-line taxable value and tax, classifies the transaction as intra- or
//! inter-state, splits tax into CGST+SGST or IGST, and aggregates document
//! totals. Purely deterministic domain logic: no IO, no HTTP, no storage,
//! no state between calls.

pub mod classify;
pub mod ledger;

pub use classify::{TransactionClass, classify_transaction};
pub use ledger::{AggregateTotals, LineAmounts, LineItem, aggregate, compute_line};
