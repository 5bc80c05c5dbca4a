//! Monetary and rate value types.
//!
//! Amounts are `rust_decimal::Decimal` so that contribution arithmetic stays
//! exact; rounding to centavos happens only when a value is displayed.

use std::iter::Sum;
use std::ops::Mul;

use derive_more::{Add, Display};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::PayrollError;

/// A non-negative peso amount at full precision.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Add, Display, Serialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Validates `amount` coming from the named input field.
    pub fn validated(field: &'static str, amount: Decimal) -> Result<Self, PayrollError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PayrollError::invalid_input(
                field,
                format!("must not be negative, got {}", amount),
            ));
        }
        Ok(Money(amount))
    }

    pub fn new(amount: Decimal) -> Result<Self, PayrollError> {
        Self::validated("amount", amount)
    }

    /// Sum that fails instead of overflowing, reporting `field` as the
    /// offending total.
    pub fn checked_add(self, other: Money, field: &'static str) -> Result<Money, PayrollError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| PayrollError::invalid_input(field, "exceeds representable range"))
    }

    /// For rule-table constants known to be non-negative.
    pub(crate) const fn from_const(amount: Decimal) -> Self {
        Money(amount)
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Half of the amount, unrounded.
    pub fn half(self) -> Money {
        Money(self.0 / Decimal::TWO)
    }

    /// Rounded to centavos, midpoint away from zero.
    pub fn round_dp2(self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Mul<Rate> for Money {
    type Output = Money;

    fn mul(self, rate: Rate) -> Money {
        Money(self.0 * rate.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// A dimensionless fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    pub fn new(fraction: Decimal) -> Result<Self, PayrollError> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(PayrollError::invalid_input(
                "rate",
                format!("must be within [0, 1], got {}", fraction),
            ));
        }
        Ok(Rate(fraction))
    }

    pub(crate) const fn from_const(fraction: Decimal) -> Self {
        Rate(fraction)
    }

    pub fn fraction(self) -> Decimal {
        self.0
    }

    /// The rate expressed in percent, e.g. `0.05` becomes `5`.
    pub fn as_percent(self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}
