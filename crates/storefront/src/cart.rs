//! Shopping cart store.
//!
//! One line item per product. Quantities are kept within `[1, stock]`: adds
//! beyond the stock ceiling are silently truncated, and a quantity update to
//! zero or below removes the line. Totals are computed from the line items on
//! every read.

use serde::Serialize;
use tracing::{debug, instrument};

use saranya_core::{Price, ProductId};

use crate::catalog::Product;

/// One product's aggregated quantity in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    /// Retail unit price.
    pub price: Price,
    pub image: String,
    /// Always within `[1, stock]`.
    pub quantity: u32,
    /// Stock ceiling captured when the line was created.
    pub stock: u32,
}

impl CartLineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Line items for one session.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartLineItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items, in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Returns `true` if the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of all line totals at retail.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Add `quantity` units of `product`, capped at its stock.
    ///
    /// A new product gets a line of `min(quantity, stock)`; an existing line
    /// grows to `min(current + quantity, stock)`. Adding zero units, or a
    /// product with no stock, changes nothing.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
            let wanted = item.quantity.saturating_add(quantity);
            item.quantity = wanted.min(item.stock);
            if item.quantity < wanted {
                debug!(wanted, stock = item.stock, "Truncated to stock ceiling");
            }
            return;
        }

        let quantity = quantity.min(product.stock);
        if quantity == 0 {
            debug!(stock = product.stock, "Nothing to add");
            return;
        }

        self.items.push(CartLineItem {
            id: product.id.clone(),
            name: product.name.to_owned(),
            price: product.price,
            image: product.image.to_owned(),
            quantity,
            stock: product.stock,
        });
    }

    /// Set a line's quantity. Zero or below removes the line; anything else is
    /// clamped to `[1, stock]`. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            let requested = u32::try_from(quantity).unwrap_or(u32::MAX);
            item.quantity = requested.clamp(1, item.stock.max(1));
        }
    }

    /// Remove a line. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "Clearing cart");
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;

    fn vanilla() -> Product {
        catalog::find(&ProductId::new("1")).unwrap().clone()
    }

    fn with_stock(stock: u32) -> Product {
        Product {
            id: ProductId::new("x"),
            stock,
            ..vanilla()
        }
    }

    fn assert_invariants(cart: &CartStore) {
        for item in cart.items() {
            assert!(item.quantity >= 1, "{item:?} below 1");
            assert!(item.quantity <= item.stock, "{item:?} above stock");
        }
        assert_eq!(
            cart.total_items(),
            cart.items().iter().map(|i| i.quantity).sum::<u32>()
        );
        assert_eq!(
            cart.total_price(),
            cart.items().iter().map(|i| i.price * i.quantity).sum::<Price>()
        );
    }

    #[test]
    fn test_add_single_item() {
        let mut cart = CartStore::new();
        cart.add_item(&vanilla(), 1);

        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), Price::from_units(149));
    }

    #[test]
    fn test_add_existing_increments() {
        let mut cart = CartStore::new();
        cart.add_item(&vanilla(), 2);
        cart.add_item(&vanilla(), 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(&ProductId::new("1")).unwrap().quantity, 5);
        assert_eq!(cart.total_price(), Price::from_units(745));
    }

    #[test]
    fn test_add_truncates_to_stock() {
        let product = with_stock(5);
        let mut cart = CartStore::new();
        cart.add_item(&product, 4);
        cart.add_item(&product, 3);
        assert_eq!(cart.get(&product.id).unwrap().quantity, 5);

        let mut cart = CartStore::new();
        cart.add_item(&product, 7);
        assert_eq!(cart.get(&product.id).unwrap().quantity, 5);
    }

    #[test]
    fn test_add_out_of_stock_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(&with_stock(0), 1);
        cart.add_item(&vanilla(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_to_zero_removes() {
        let mut cart = CartStore::new();
        cart.add_item(&vanilla(), 3);
        cart.update_quantity(&ProductId::new("1"), 0);

        assert!(cart.get(&ProductId::new("1")).is_none());
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_update_negative_removes() {
        let mut cart = CartStore::new();
        cart.add_item(&vanilla(), 3);
        cart.update_quantity(&ProductId::new("1"), -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_clamps_to_stock() {
        let product = with_stock(5);
        let mut cart = CartStore::new();
        cart.add_item(&product, 1);

        cart.update_quantity(&product.id, 99);
        assert_eq!(cart.get(&product.id).unwrap().quantity, 5);

        cart.update_quantity(&product.id, i64::MAX);
        assert_eq!(cart.get(&product.id).unwrap().quantity, 5);

        cart.update_quantity(&product.id, 2);
        assert_eq!(cart.get(&product.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cart = CartStore::new();
        cart.add_item(&vanilla(), 1);
        cart.update_quantity(&ProductId::new("missing"), 3);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = CartStore::new();
        cart.add_item(&vanilla(), 1);
        cart.add_item(&with_stock(5), 2);

        cart.remove_item(&ProductId::new("1"));
        let once: Vec<_> = cart.items().to_vec();
        cart.remove_item(&ProductId::new("1"));
        assert_eq!(cart.items(), once.as_slice());
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add_item(&vanilla(), 1);
        cart.add_item(&with_stock(5), 2);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_invariants_hold_over_mixed_sequence() {
        let small = with_stock(3);
        let big = vanilla();
        let mut cart = CartStore::new();

        let steps: [(&Product, i64); 10] = [
            (&small, 2),
            (&big, 40),
            (&small, 5),
            (&big, -1),
            (&big, 30),
            (&small, 0),
            (&big, 1),
            (&small, 1),
            (&big, 100),
            (&small, -3),
        ];

        for (i, (product, n)) in steps.into_iter().enumerate() {
            if i % 2 == 0 {
                cart.add_item(product, u32::try_from(n.max(0)).unwrap());
            } else {
                cart.update_quantity(&product.id, n);
            }
            assert_invariants(&cart);
        }
    }
}
