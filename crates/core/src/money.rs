//! Money value object.
//!
//! Amounts are stored in the smallest currency unit (centavos) as an unsigned
//! integer, so they are non-negative by construction and safe to compare and
//! sum without floating-point drift. Display renders the conventional
//! two-decimal form used by the checkout message ("104.70").

use serde::{Deserialize, Serialize};

/// Non-negative monetary amount in centavos.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    /// Whole currency units (e.g. `from_reais(1500)` is R$ 1500.00).
    pub const fn from_reais(reais: u64) -> Self {
        Self(reais * 100)
    }

    pub const fn centavos(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Line subtotal: unit price times quantity.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0 * quantity as u64)
    }

    pub const fn saturating_sub(self, other: Money) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Fraction of `minimum` this amount covers, clamped to `1.0`.
    ///
    /// A zero minimum is defined as fully covered (ratio 1), which doubles as
    /// the division-by-zero guard for the eligibility progress indicator.
    pub fn ratio_of(self, minimum: Money) -> f64 {
        if minimum.is_zero() {
            return 1.0;
        }
        (self.0 as f64 / minimum.0 as f64).min(1.0)
    }

    /// Lenient parse for admin form input: accepts "19.90" and "19,90",
    /// coercing anything non-numeric (or negative) to zero.
    pub fn parse_lenient(input: &str) -> Money {
        let normalized = input.trim().replace(',', ".");
        match normalized.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {
                Money((value * 100.0).round() as u64)
            }
            _ => Money::ZERO,
        }
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl core::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
