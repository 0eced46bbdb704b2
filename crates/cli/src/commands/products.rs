//! Catalog listing and wholesale quotes.

use saranya_core::ProductId;
use saranya_storefront::catalog::{self, Category};
use saranya_storefront::error::{AppError, Result};
use saranya_storefront::pricing;
use tracing::info;

/// List products, optionally restricted to one category.
///
/// # Errors
///
/// Returns an error if the category is not recognised.
pub fn list(category: Option<&str>) -> Result<()> {
    let category = category
        .filter(|c| !c.eq_ignore_ascii_case("all"))
        .map(str::parse::<Category>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    for product in catalog::by_category(category) {
        let stock_note = if product.is_low_stock() {
            format!("low stock - only {} left", product.stock)
        } else {
            format!("{} in stock", product.stock)
        };
        info!(
            "[{}] {} ({}, {}) {} - {}",
            product.id, product.name, product.category, product.weight, product.price, stock_note
        );
    }
    Ok(())
}

/// Print the price breakdown for `quantity` units of a product.
///
/// # Errors
///
/// Returns an error if the product does not exist or the quantity is outside
/// `[1, stock]`.
pub fn quote(product_id: &str, quantity: u32) -> Result<()> {
    let product = catalog::find(&ProductId::new(product_id))
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    if quantity == 0 || quantity > product.stock {
        return Err(AppError::BadRequest(format!(
            "quantity must be between 1 and {}",
            product.stock
        )));
    }

    let quote = pricing::quote(product, quantity);
    info!("{} x {}", quantity, product.name);
    info!(
        "Retail: {} (1-{} units)",
        quote.retail_price,
        pricing::WHOLESALE_MIN_QTY - 1
    );
    info!(
        "Wholesale: {} ({}+ units, 15% off)",
        quote.wholesale_price,
        pricing::WHOLESALE_MIN_QTY
    );
    info!("Unit price: {}  Total: {}", quote.unit_price, quote.total);
    if quote.is_wholesale {
        info!("Wholesale pricing applied! You save {}", quote.savings);
    }
    Ok(())
}
