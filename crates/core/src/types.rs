//! Scalar domain value types: tax rates and quantities.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// GST rate in basis points (1 bps = 0.01%).
///
/// Stored as basis points so fractional slabs (0.25%, 8.25%) stay exact in
/// integer math. `Ord` is derived so rates can key report groupings.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    pub const MAX_BPS: u32 = 10_000;

    /// Unchecked constructor for known-good rates (catalog slabs, tests).
    pub const fn from_bps(bps: u32) -> Self {
        Self(bps)
    }

    /// Convenience for whole-percent rates: `from_percent(18)` is 18%.
    pub const fn from_percent(percent: u32) -> Self {
        Self(percent * 100)
    }

    /// Checked constructor: GST rates live in `0..=100` percent.
    pub fn new(bps: u32) -> DomainResult<Self> {
        if bps > Self::MAX_BPS {
            return Err(DomainError::validation(format!(
                "tax rate {bps} bps exceeds 100%"
            )));
        }
        Ok(Self(bps))
    }

    pub const fn bps(&self) -> u32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

/// Unit count in fixed-point milli-units (three fractional digits).
///
/// Covers both piece counts (2 pcs) and fractional measures (1.250 kg)
/// without floating point. Signed so callers can express corrections; the
/// tax core clamps negatives to zero.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub const fn from_whole(units: i64) -> Self {
        Self(units * 1_000)
    }

    pub const fn from_milli(milli: i64) -> Self {
        Self(milli)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn milli(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Clamp negative quantities to zero. Used when hardening untrusted input.
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 { Self(0) } else { self }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 1_000 == 0 {
            write!(f, "{}", self.0 / 1_000)
        } else {
            write!(f, "{}.{:03}", self.0 / 1_000, (self.0 % 1_000).abs())
        }
    }
}
