//! Immutable invoice/order document and its derived totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gstbill_core::{DocumentId, DomainError, DomainResult};
use gstbill_parties::{Counterparty, StateCode};
use gstbill_tax::{AggregateTotals, LineItem, TransactionClass, aggregate, classify_transaction};

/// Billing document kind. Invoices and orders carry identical tax shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Order,
}

/// An invoice or order as a plain value.
///
/// The document is immutable: edit operations return a new `Document` and
/// leave the receiver untouched. Callers that drive a live editing screen
/// keep their own mutable buffer and recompute [`Document::totals`] after
/// every change. Persistence and numbering are external concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    kind: DocumentKind,
    buyer: Counterparty,
    lines: Vec<LineItem>,
    issued_at: DateTime<Utc>,
}

/// Classification plus totals, as computed in one pass over a document.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub class: TransactionClass,
    pub amounts: AggregateTotals,
}

impl Document {
    pub fn new(kind: DocumentKind, buyer: Counterparty, issued_at: DateTime<Utc>) -> Self {
        Self {
            id: DocumentId::new(),
            kind,
            buyer,
            lines: Vec::new(),
            issued_at,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn buyer(&self) -> &Counterparty {
        &self.buyer
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// New document with `line` appended.
    pub fn with_line(&self, line: LineItem) -> Self {
        let mut next = self.clone();
        next.lines.push(line);
        next
    }

    /// New document with the line at `index` replaced.
    pub fn replace_line(&self, index: usize, line: LineItem) -> DomainResult<Self> {
        if index >= self.lines.len() {
            return Err(DomainError::validation(format!(
                "no line at index {index}"
            )));
        }
        let mut next = self.clone();
        next.lines[index] = line;
        Ok(next)
    }

    /// New document with the line at `index` removed.
    pub fn without_line(&self, index: usize) -> DomainResult<Self> {
        if index >= self.lines.len() {
            return Err(DomainError::validation(format!(
                "no line at index {index}"
            )));
        }
        let mut next = self.clone();
        next.lines.remove(index);
        Ok(next)
    }

    /// New document with the buyer replaced (re-classifies on next totals).
    pub fn with_buyer(&self, buyer: Counterparty) -> Self {
        let mut next = self.clone();
        next.buyer = buyer;
        next
    }

    /// Classify against `seller` and aggregate totals in one pass.
    ///
    /// Pure and side-effect free apart from a debug-level trace event; safe
    /// to call on every keystroke of an editing screen (debouncing is the
    /// caller's concern).
    pub fn totals(&self, seller: StateCode) -> DocumentTotals {
        let class = classify_transaction(seller, &self.buyer.tax_id);
        let amounts = aggregate(&self.lines, class);
        tracing::debug!(
            document = %self.id,
            ?class,
            lines = self.lines.len(),
            grand_total = %amounts.grand_total,
            "recomputed document totals"
        );
        DocumentTotals { class, amounts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gstbill_core::{Money, ProductRef, Quantity, TaxRate};

    fn seller() -> StateCode {
        StateCode::parse("07").unwrap()
    }

    fn line(qty: i64, rate_paise: i64, percent: u32) -> LineItem {
        LineItem {
            product: ProductRef::new(),
            quantity: Quantity::from_whole(qty),
            unit_rate: Money::from_paise(rate_paise),
            tax_rate: TaxRate::from_percent(percent),
        }
    }

    fn invoice(buyer: Counterparty) -> Document {
        Document::new(DocumentKind::Invoice, buyer, Utc::now())
    }

    #[test]
    fn registered_same_state_buyer_splits_locally() {
        let doc = invoice(Counterparty::new("Acme", "07ABCDE1234F2Z9"))
            .with_line(line(2, 50_000, 18));
        let totals = doc.totals(seller());

        assert_eq!(totals.class, TransactionClass::Intra);
        assert_eq!(totals.amounts.cgst, Money::from_rupees(90, 0));
        assert_eq!(totals.amounts.sgst, Money::from_rupees(90, 0));
        assert_eq!(totals.amounts.grand_total, Money::from_rupees(1_180, 0));
    }

    #[test]
    fn out_of_state_buyer_bills_igst() {
        let doc = invoice(Counterparty::new("Acme", "27AAAAA0000A1Z5"))
            .with_line(line(2, 50_000, 18));
        let totals = doc.totals(seller());

        assert_eq!(totals.class, TransactionClass::Inter);
        assert_eq!(totals.amounts.igst, Money::from_rupees(180, 0));
        assert_eq!(totals.amounts.cgst, Money::zero());
    }

    #[test]
    fn walk_in_buyer_falls_back_to_local_split() {
        let doc = invoice(Counterparty::unregistered("Walk-in"))
            .with_line(line(2, 50_000, 18));
        let totals = doc.totals(seller());

        assert_eq!(totals.class, TransactionClass::Unknown);
        assert_eq!(totals.amounts.cgst, totals.amounts.sgst);
        assert_eq!(
            totals.amounts.cgst + totals.amounts.sgst,
            totals.amounts.total_tax
        );
    }

    #[test]
    fn edits_return_new_values() {
        let original = invoice(Counterparty::unregistered("Walk-in")).with_line(line(1, 100, 5));
        let edited = original.replace_line(0, line(3, 100, 5)).unwrap();

        assert_eq!(original.lines()[0].quantity, Quantity::from_whole(1));
        assert_eq!(edited.lines()[0].quantity, Quantity::from_whole(3));

        let removed = edited.without_line(0).unwrap();
        assert!(removed.lines().is_empty());
        assert_eq!(edited.lines().len(), 1);
    }

    #[test]
    fn editing_out_of_range_is_a_validation_error() {
        let doc = invoice(Counterparty::unregistered("Walk-in"));
        assert!(matches!(
            doc.replace_line(0, line(1, 100, 5)),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            doc.without_line(3),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn changing_buyer_changes_classification_not_grand_total() {
        let doc = invoice(Counterparty::new("Acme", "07ABCDE1234F2Z9"))
            .with_line(line(2, 50_000, 18));
        let intra = doc.totals(seller());

        let inter = doc
            .with_buyer(Counterparty::new("Acme", "27AAAAA0000A1Z5"))
            .totals(seller());

        assert_ne!(intra.class, inter.class);
        assert_eq!(intra.amounts.grand_total, inter.amounts.grand_total);
        assert_eq!(intra.amounts.total_tax, inter.amounts.total_tax);
    }

    #[test]
    fn empty_document_totals_are_zero() {
        let doc = invoice(Counterparty::unregistered("Walk-in"));
        let totals = doc.totals(seller());
        assert_eq!(totals.amounts, AggregateTotals::zero());
    }

    #[test]
    fn document_serde_round_trips() {
        let doc = invoice(Counterparty::new("Acme", "07ABCDE1234F2Z9"))
            .with_line(line(2, 50_000, 18));
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
