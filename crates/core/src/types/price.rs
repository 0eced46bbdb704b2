//! Type-safe price representation using decimal arithmetic.
//!
//! Storefront prices are whole rupees, but amounts are kept as [`Decimal`] so
//! percentage discounts (the wholesale tier) can be computed exactly before
//! rounding back to a whole unit.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// A zero amount in the default currency.
    pub const ZERO: Self = Self::new(Decimal::ZERO, CurrencyCode::INR);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from a whole number of rupees.
    ///
    /// ```
    /// use saranya_core::Price;
    ///
    /// assert_eq!(Price::from_units(149).to_string(), "₹149");
    /// ```
    #[must_use]
    pub fn from_units(units: u64) -> Self {
        Self::new(Decimal::from(units), CurrencyCode::INR)
    }

    /// Round to the nearest whole unit, halves away from zero.
    #[must_use]
    pub fn round_to_unit(self) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            self.currency_code,
        )
    }

    /// Scale by a decimal factor (e.g. `0.85` for 15% off). Not rounded.
    #[must_use]
    pub fn scale(self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency_code)
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self::new(self.amount * Decimal::from(rhs), self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount.normalize())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_line_totals() {
        let total: Price = [Price::from_units(149) * 3, Price::from_units(179)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_units(626));
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Price = core::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let price = Price::new(Decimal::new(12665, 2), CurrencyCode::INR);
        assert_eq!(price.round_to_unit(), Price::from_units(127));

        let half = Price::new(Decimal::new(85, 1), CurrencyCode::INR);
        assert_eq!(half.round_to_unit(), Price::from_units(9));
    }

    #[test]
    fn test_display_drops_trailing_zeros() {
        let price = Price::from_units(500).scale(Decimal::ONE);
        assert_eq!(price.to_string(), "₹500");
    }
}
