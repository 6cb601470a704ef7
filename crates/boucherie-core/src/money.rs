//! # Money Module
//!
//! Provides the `Money` and `Quantity` types for handling amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Francs                                           │
//! │    The CFA franc has no minor unit, so every price and total is a      │
//! │    plain integer. Weighed quantities are integers too (hundredths      │
//! │    of a kg), so a line total is exact integer math until the single    │
//! │    rounding step.                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boucherie_core::money::{Money, Quantity};
//!
//! let price = Money::from_francs(1500);        // 1 500 F per kg
//! let qty = Quantity::from_hundredths(250);    // 2.50 kg
//!
//! // 1500 × 2.50 = 3750, rounded once
//! let line = Money::round_hundredths(price.francs() as i128 * qty.hundredths() as i128);
//! assert_eq!(line.francs(), 3750);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in CFA francs, the smallest (and only) currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic intermediate values may dip negative even
///   though every persisted amount is non-negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a plain JSON number, matching the
///   persisted ledger layout
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole francs.
    #[inline]
    pub const fn from_francs(francs: i64) -> Self {
        Money(francs)
    }

    /// Returns the value in francs.
    #[inline]
    pub const fn francs(&self) -> i64 {
        self.0
    }

    /// Zero francs.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// THE rounding rule of this system: half up, on a value expressed in
    /// hundredths of a franc.
    ///
    /// Every franc amount that is derived from a `price × quantity` product
    /// passes through this function exactly once: line totals on receipts,
    /// the cart/sale total, and per-product revenue in reports. Historical
    /// totals are stored rounded and never recomputed.
    ///
    /// ## Example
    /// ```rust
    /// use boucherie_core::money::Money;
    ///
    /// assert_eq!(Money::round_hundredths(375_000).francs(), 3750); // exact
    /// assert_eq!(Money::round_hundredths(150).francs(), 2);        // 1.50 → 2
    /// assert_eq!(Money::round_hundredths(149).francs(), 1);        // 1.49 → 1
    /// ```
    pub fn round_hundredths(hundredths: i128) -> Money {
        // i128 input so price × quantity cannot overflow before rounding
        let rounded = if hundredths >= 0 {
            (hundredths + 50) / 100
        } else {
            (hundredths - 50) / 100
        };
        Money(rounded as i64)
    }
}

/// Display implementation shows the amount with thousands grouping.
///
/// ## Note
/// This is for debugging and plain-text receipts. The frontend handles
/// locale-aware formatting for on-screen display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{} FCFA", sign, grouped)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Quantity Type
// =============================================================================

/// A product quantity in hundredths of a unit.
///
/// Weighed products (kg) carry up to two decimal places; piece-counted
/// products are whole. Storing hundredths keeps line-total math exact:
/// `price × quantity` is an integer number of hundredths of a franc, which
/// [`Money::round_hundredths`] then rounds exactly once.
///
/// ## Serialization
/// Serializes as a decimal number (`2.5`, not `250`) so the persisted
/// ledger matches the documented layout; two-decimal values round-trip
/// losslessly through f64.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from hundredths of a unit (250 = 2.50 kg).
    #[inline]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Quantity(hundredths)
    }

    /// Creates a whole-unit quantity (3 pieces, 2 kg).
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Quantity(units * 100)
    }

    /// Creates a quantity from a decimal number, rounded to the nearest
    /// hundredth. Returns `None` for NaN or infinite input.
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Quantity((value * 100.0).round() as i64))
    }

    /// Returns the quantity in hundredths of a unit.
    #[inline]
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    /// Checks if the quantity is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the quantity is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the quantity is a whole number of units.
    #[inline]
    pub const fn is_integral(&self) -> bool {
        self.0 % 100 == 0
    }
}

/// Displays as a plain integer for whole quantities, two decimals otherwise.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.0 / 100)
        } else {
            let sign = if self.0 < 0 { "-" } else { "" };
            write!(f, "{}{}.{:02}", sign, self.0.abs() / 100, self.0.abs() % 100)
        }
    }
}

impl Add for Quantity {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Quantity(self.0 + other.0)
    }
}

impl AddAssign for Quantity {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Quantity::try_from_f64(value)
            .ok_or_else(|| serde::de::Error::custom("quantity must be a finite number"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_francs() {
        let price = Money::from_francs(1500);
        assert_eq!(price.francs(), 1500);
        assert!(price.is_positive());
        assert!(!price.is_zero());
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(format!("{}", Money::from_francs(1500)), "1 500 FCFA");
        assert_eq!(format!("{}", Money::from_francs(500)), "500 FCFA");
        assert_eq!(format!("{}", Money::from_francs(1_250_000)), "1 250 000 FCFA");
        assert_eq!(format!("{}", Money::from_francs(0)), "0 FCFA");
        assert_eq!(format!("{}", Money::from_francs(-750)), "-750 FCFA");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_francs(3000);
        let b = Money::from_francs(500);

        assert_eq!((a + b).francs(), 3500);
        assert_eq!((a - b).francs(), 2500);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.francs(), 4000);
    }

    #[test]
    fn test_round_half_up() {
        // 1500 × 2.00 kg = 300000 hundredths = exactly 3000 F
        assert_eq!(Money::round_hundredths(300_000).francs(), 3000);
        // the half-franc boundary rounds up
        assert_eq!(Money::round_hundredths(150).francs(), 2);
        assert_eq!(Money::round_hundredths(149).francs(), 1);
        assert_eq!(Money::round_hundredths(50).francs(), 1);
        assert_eq!(Money::round_hundredths(49).francs(), 0);
    }

    #[test]
    fn test_quantity_constructors() {
        assert_eq!(Quantity::from_units(3).hundredths(), 300);
        assert_eq!(Quantity::from_hundredths(250).hundredths(), 250);
        assert_eq!(Quantity::try_from_f64(1.25), Some(Quantity::from_hundredths(125)));
        assert_eq!(Quantity::try_from_f64(f64::NAN), None);
        assert_eq!(Quantity::try_from_f64(f64::INFINITY), None);
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(format!("{}", Quantity::from_units(3)), "3");
        assert_eq!(format!("{}", Quantity::from_hundredths(250)), "2.50");
        assert_eq!(format!("{}", Quantity::from_hundredths(5)), "0.05");
    }

    #[test]
    fn test_quantity_serde_round_trip() {
        let whole = Quantity::from_units(2);
        let weighed = Quantity::from_hundredths(175);

        assert_eq!(serde_json::to_string(&whole).unwrap(), "2");
        assert_eq!(serde_json::to_string(&weighed).unwrap(), "1.75");

        let back: Quantity = serde_json::from_str("1.75").unwrap();
        assert_eq!(back, weighed);
        let back: Quantity = serde_json::from_str("2").unwrap();
        assert_eq!(back, whole);
    }

    #[test]
    fn test_quantity_rejects_non_finite() {
        let err: Result<Quantity, _> = serde_json::from_str("\"abc\"");
        assert!(err.is_err());
    }
}
