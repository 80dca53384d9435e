//! GST filing report and sales summary.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gstbill_billing::{Document, DocumentKind, SellerProfile};
use gstbill_core::{DocumentId, Money, TaxRate};
use gstbill_tax::compute_line;

/// One document's worth of the GST report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstReportRow {
    pub document: DocumentId,
    pub kind: DocumentKind,
    pub buyer: String,
    pub issued_at: DateTime<Utc>,
    pub taxable_value: Money,
    pub cgst: Money,
    pub sgst: Money,
    pub igst: Money,
    pub total_tax: Money,
}

/// Period GST summary: per-document rows, component totals, and tax grouped
/// by rate slab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstReport {
    pub rows: Vec<GstReportRow>,
    pub taxable_value: Money,
    pub cgst: Money,
    pub sgst: Money,
    pub igst: Money,
    pub total_tax: Money,
    /// Tax collected per rate slab, across all qualifying documents.
    pub by_rate: BTreeMap<TaxRate, Money>,
}

/// Period sales summary (all documents, taxed or not).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub documents: usize,
    pub subtotal: Money,
    pub total_tax: Money,
    pub grand_total: Money,
}

fn in_period(doc: &Document, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
    doc.issued_at() >= from && doc.issued_at() <= to
}

/// Build the GST report for documents issued in `[from, to]`.
///
/// Documents with no tax in the period are excluded from the table (they
/// have nothing to file). Components come from each document's own
/// classification against the seller profile, so a mixed period of intra-
/// and inter-state documents reports both sides correctly.
pub fn gst_report(
    documents: &[Document],
    seller: &SellerProfile,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> GstReport {
    let mut report = GstReport {
        rows: Vec::new(),
        taxable_value: Money::zero(),
        cgst: Money::zero(),
        sgst: Money::zero(),
        igst: Money::zero(),
        total_tax: Money::zero(),
        by_rate: BTreeMap::new(),
    };

    for doc in documents.iter().filter(|d| in_period(d, from, to)) {
        let totals = doc.totals(seller.state_code);
        if totals.amounts.total_tax.is_zero() {
            continue;
        }

        for line in doc.lines() {
            let amounts = compute_line(line);
            if !amounts.tax.is_zero() {
                *report.by_rate.entry(line.tax_rate).or_insert(Money::zero()) += amounts.tax;
            }
        }

        report.taxable_value += totals.amounts.subtotal;
        report.cgst += totals.amounts.cgst;
        report.sgst += totals.amounts.sgst;
        report.igst += totals.amounts.igst;
        report.total_tax += totals.amounts.total_tax;
        report.rows.push(GstReportRow {
            document: doc.id(),
            kind: doc.kind(),
            buyer: doc.buyer().name.clone(),
            issued_at: doc.issued_at(),
            taxable_value: totals.amounts.subtotal,
            cgst: totals.amounts.cgst,
            sgst: totals.amounts.sgst,
            igst: totals.amounts.igst,
            total_tax: totals.amounts.total_tax,
        });
    }

    tracing::info!(
        documents = report.rows.len(),
        total_tax = %report.total_tax,
        slabs = report.by_rate.len(),
        "generated GST report"
    );
    report
}

/// Summarize sales over `[from, to]`: every document counts, taxed or not.
pub fn sales_summary(
    documents: &[Document],
    seller: &SellerProfile,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> SalesSummary {
    let mut summary = SalesSummary {
        documents: 0,
        subtotal: Money::zero(),
        total_tax: Money::zero(),
        grand_total: Money::zero(),
    };

    for doc in documents.iter().filter(|d| in_period(d, from, to)) {
        let totals = doc.totals(seller.state_code);
        summary.documents += 1;
        summary.subtotal += totals.amounts.subtotal;
        summary.total_tax += totals.amounts.total_tax;
        summary.grand_total += totals.amounts.grand_total;
    }

    tracing::info!(
        documents = summary.documents,
        grand_total = %summary.grand_total,
        "generated sales summary"
    );
    summary
}
