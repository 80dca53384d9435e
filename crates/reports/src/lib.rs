//! Reporting over finalized billing documents.
//!
//! Derives period-scoped views (GST filing summary, sales summary) from a
//! slice of documents. Documents hold data; reports derive — nothing here is
//! stored or mutated.

pub mod gst_report;

pub use gst_report::{GstReport, GstReportRow, SalesSummary, gst_report, sales_summary};
