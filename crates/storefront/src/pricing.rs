//! Tiered wholesale pricing for the product detail quantity selector.
//!
//! Buying [`WHOLESALE_MIN_QTY`] or more units of one product qualifies for a
//! 15% discount on the unit price, rounded to the nearest rupee. Quotes are
//! informational: cart line items are always priced at retail.

use rust_decimal::Decimal;
use serde::Serialize;

use saranya_core::Price;

use crate::catalog::Product;

/// Minimum units of one product for the wholesale tier.
pub const WHOLESALE_MIN_QTY: u32 = 10;

/// Discount applied at the wholesale tier (0.15).
pub const WHOLESALE_DISCOUNT: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Price breakdown for buying `quantity` units of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub quantity: u32,
    /// Unit price actually charged at this quantity.
    pub unit_price: Price,
    pub total: Price,
    /// Whether the wholesale tier applies.
    pub is_wholesale: bool,
    /// Difference from paying retail for every unit. Zero below the tier.
    pub savings: Price,
    pub retail_price: Price,
    pub wholesale_price: Price,
}

/// Retail price less the wholesale discount, rounded to a whole unit.
#[must_use]
pub fn wholesale_unit_price(retail: Price) -> Price {
    retail.scale(Decimal::ONE - WHOLESALE_DISCOUNT).round_to_unit()
}

/// Quote `quantity` units of `product`.
///
/// ```
/// use saranya_core::{Price, ProductId};
/// use saranya_storefront::{catalog, pricing};
///
/// let vanilla = catalog::find(&ProductId::new("1")).unwrap();
/// let quote = pricing::quote(vanilla, 10);
/// assert!(quote.is_wholesale);
/// assert_eq!(quote.unit_price, Price::from_units(127));
/// assert_eq!(quote.savings, Price::from_units(220));
/// ```
#[must_use]
pub fn quote(product: &Product, quantity: u32) -> Quote {
    let retail_price = product.price;
    let wholesale_price = wholesale_unit_price(retail_price);
    let is_wholesale = quantity >= WHOLESALE_MIN_QTY;

    let unit_price = if is_wholesale {
        wholesale_price
    } else {
        retail_price
    };
    let total = unit_price * quantity;
    let savings = if is_wholesale {
        Price::new(
            (retail_price * quantity).amount - total.amount,
            retail_price.currency_code,
        )
    } else {
        Price::ZERO
    };

    Quote {
        quantity,
        unit_price,
        total,
        is_wholesale,
        savings,
        retail_price,
        wholesale_price,
    }
}

/// Apply a `+`/`-` step to the quantity selector. Steps that would leave
/// `[1, stock]` are ignored and the current quantity is returned.
#[must_use]
pub fn step_quantity(product: &Product, current: u32, delta: i64) -> u32 {
    let next = i64::from(current) + delta;
    if next >= 1 && next <= i64::from(product.stock) {
        u32::try_from(next).unwrap_or(current)
    } else {
        current
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;
    use saranya_core::ProductId;

    fn product(id: &str) -> &'static Product {
        catalog::find(&ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_below_tier_is_retail() {
        let quote = quote(product("2"), 9);
        assert!(!quote.is_wholesale);
        assert_eq!(quote.unit_price, Price::from_units(179));
        assert_eq!(quote.total, Price::from_units(1611));
        assert!(quote.savings.is_zero());
    }

    #[test]
    fn test_at_tier_is_discounted() {
        // 179 * 0.85 = 152.15
        let quote = quote(product("2"), 10);
        assert!(quote.is_wholesale);
        assert_eq!(quote.unit_price, Price::from_units(152));
        assert_eq!(quote.total, Price::from_units(1520));
        assert_eq!(quote.savings, Price::from_units(270));
    }

    #[test]
    fn test_wholesale_rounding() {
        assert_eq!(wholesale_unit_price(Price::from_units(149)), Price::from_units(127));
        assert_eq!(wholesale_unit_price(Price::from_units(159)), Price::from_units(135));
        assert_eq!(wholesale_unit_price(Price::from_units(189)), Price::from_units(161));
        // 10 * 0.85 = 8.5 rounds up
        assert_eq!(wholesale_unit_price(Price::from_units(10)), Price::from_units(9));
    }

    #[test]
    fn test_step_quantity_stays_in_range() {
        let mango = product("4");
        assert_eq!(step_quantity(mango, 1, -1), 1);
        assert_eq!(step_quantity(mango, 1, 1), 2);
        assert_eq!(step_quantity(mango, 30, 1), 30);
        assert_eq!(step_quantity(mango, 29, 1), 30);
    }
}
