//! Fixed-point monetary amounts and interest rates.
//!
//! Uses `rust_decimal` internally so balance arithmetic is exact decimal
//! arithmetic without floating-point errors. Rounding happens only when an
//! amount is rendered.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount held at full decimal precision.
///
/// Balances, deposits, withdrawals and overdraft limits are all `Money`.
/// Values may be negative (a checking account using its overdraft).
/// `Display` and `Serialize` render exactly 4 decimal places, rounding half
/// away from zero; comparisons and arithmetic use the unrounded value.
///
/// # Range
///
/// The range is that of `rust_decimal::Decimal` (magnitude below roughly
/// 7.9e28, at most 28 fractional digits). Arithmetic that leaves this range
/// panics, as it does for `Decimal`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use banking_system::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.5000");
///
/// let tiny = Money::from_str("0.00001").unwrap();
/// assert!(tiny.is_positive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// Decimal places used when rendering.
    pub const SCALE: u32 = 4;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns the value, or zero if it is negative.
    pub fn clamp_non_negative(self) -> Self {
        self.max(Self::ZERO)
    }

    /// The underlying decimal.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// The value rounded half away from zero to at most [`Money::SCALE`] places.
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            // no "-0.0000"
            rounded = Decimal::ZERO;
        }
        rounded
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money::new(value)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Money::new(Decimal::from(value))
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.rounded())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
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

    fn sub(self, rhs: Self) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

/// Applies a rate to an amount without rounding.
impl Mul<Rate> for Money {
    type Output = Self;

    fn mul(self, rhs: Rate) -> Self::Output {
        Money(self.0 * rhs.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A fractional ratio such as an interest rate (`0.02` is 2%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Self = Rate(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Rate(value)
    }

    /// Returns the rate, or zero if it is negative.
    pub fn clamp_non_negative(self) -> Self {
        self.max(Self::ZERO)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Rate {
    fn from(value: Decimal) -> Self {
        Rate(value)
    }
}

impl FromStr for Rate {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Rate(Decimal::from_str(s.trim())?))
    }
}

/// Renders as a percentage with two decimal places.
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = (self.0 * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}%", percent)
    }
}
