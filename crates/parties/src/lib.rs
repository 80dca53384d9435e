//! Counterparty tax identity.
//!
//! This crate owns GSTIN parsing/validation and the registration state code
//! derived from it, so the two-character extraction heuristic lives in exactly
//! one place. Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod gstin;
pub mod party;

pub use gstin::{Gstin, StateCode};
pub use party::Counterparty;
