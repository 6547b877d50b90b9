//! Money type for representing prices and order totals.
//!
//! Uses a cents-based integer representation to avoid floating-point
//! precision issues in price arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary amount in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents.
    cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_core::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// A zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Get the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Add another amount, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::new)
    }

    /// Multiply by a unit count.
    pub fn multiply(&self, count: i64) -> Money {
        Money::new(self.cents * count)
    }

    /// Multiply by a decimal factor, rounded to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        Money::new((self.cents as f64 * factor).round() as i64)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        if self.cents < 0 {
            format!("-${:.2}", -self.to_decimal())
        } else {
            format!("${:.2}", self.to_decimal())
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.cents + other.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.cents - other.cents)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, count: i64) -> Money {
        self.multiply(count)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999);
        assert_eq!(m.cents(), 4999);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99);
        assert_eq!(m.cents(), 4999);

        let m = Money::from_decimal(1450.0);
        assert_eq!(m.cents(), 145000);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(125000).display(), "$1250.00");
        assert_eq!(Money::new(-1250).display(), "-$12.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_money_checked_add() {
        let a = Money::new(1000);
        assert_eq!(a.checked_add(Money::new(500)), Some(Money::new(1500)));
        assert_eq!(Money::new(i64::MAX).checked_add(Money::new(1)), None);
    }

    #[test]
    fn test_money_multiply_decimal_rounds_to_cent() {
        let m = Money::new(125);
        assert_eq!(m.multiply_decimal(0.5).cents(), 63);
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::new(10000);
        assert_eq!(m.percentage(10.0).cents(), 1000);
        assert_eq!(m.percentage(30.0).cents(), 3000);
    }
}
