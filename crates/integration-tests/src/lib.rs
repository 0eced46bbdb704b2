//! Integration tests for the Saranya storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p saranya-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart totals, stock ceilings and checkout ordering
//! - `notification_scenarios` - Seeded notifications and read state
//! - `theme_persistence` - Theme restore order, palette derivation and the
//!   persisted storage format

use saranya_core::ProductId;
use saranya_storefront::catalog::{self, Product};

/// A catalog product with its stock overridden.
///
/// # Panics
///
/// Panics if `id` is not in the catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn product_with_stock(id: &str, stock: u32) -> Product {
    Product {
        stock,
        ..catalog::find(&ProductId::new(id))
            .expect("product exists in catalog")
            .clone()
    }
}
