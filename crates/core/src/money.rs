//! Fixed-point money in the smallest currency unit (paise).
//!
//! Every monetary value in the workspace flows through this type. Amounts are
//! stored as integer paise; arithmetic is exact and rounding happens only at
//! the documented half-up points (tax application, quantity scaling). Display
//! formatting for end users is a presentation-layer concern.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use crate::types::{Quantity, TaxRate};

/// Monetary amount in integer paise.
///
/// Signed so that adjustments and credit notes can be expressed; the tax core
/// itself clamps negative inputs to zero before they reach totals.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Build from rupees and paise. For negative amounts only `rupees` should
    /// carry the sign: `from_rupees(-5, 50)` is -5.50.
    pub const fn from_rupees(rupees: i64, paise: i64) -> Self {
        if rupees < 0 {
            Self(rupees * 100 - paise)
        } else {
            Self(rupees * 100 + paise)
        }
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn paise(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamp negative amounts to zero. Used when hardening untrusted input.
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 { Self(0) } else { self }
    }

    /// Tax on this amount at `rate`, half-up rounded to the paisa.
    ///
    /// Integer form of `amount * rate / 100`: `(paise * bps + 5000) / 10000`.
    /// Intermediate math widens to i128 so large invoices cannot overflow.
    pub fn tax_at(&self, rate: TaxRate) -> Money {
        let tax = (self.0 as i128 * rate.bps() as i128 + 5_000) / 10_000;
        Money(tax as i64)
    }

    /// Extend a unit rate across a quantity, half-up rounded to the paisa.
    ///
    /// Quantities carry three fractional digits, so the milli scale is divided
    /// back out here: `(paise * milli + 500) / 1000`.
    pub fn extend(&self, quantity: Quantity) -> Money {
        let base = (self.0 as i128 * quantity.milli() as i128 + 500) / 1_000;
        Money(base as i64)
    }

    /// Split into two halves, assigning the odd paisa to the **first** half.
    ///
    /// The intra-state tax split sends the first half to CGST, so an 181-paise
    /// tax becomes (91, 90) and nothing is ever dropped: the two halves always
    /// sum back to the original amount.
    pub const fn split_even(self) -> (Money, Money) {
        let second = self.0 / 2;
        (Money(self.0 - second), Money(second))
    }
}

/// Debug/log formatting. User-facing currency formatting is localized by the
/// presentation layer, not here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}
