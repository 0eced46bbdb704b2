//! Order placement.

use clap::Args;
use saranya_core::ProductId;
use saranya_storefront::cart::CartStore;
use saranya_storefront::catalog;
use saranya_storefront::checkout::{CheckoutForm, OrderSummary};
use saranya_storefront::config::StorefrontConfig;
use saranya_storefront::error::{AppError, Result};
use saranya_storefront::state::AppState;
use saranya_storefront::storage::FileStorage;
use saranya_storefront::style::DocumentStyle;
use thiserror::Error;
use tracing::{info, warn};

/// Errors parsing an `--item` argument.
#[derive(Debug, Error)]
pub enum ItemSpecError {
    #[error("product id cannot be empty")]
    EmptyId,
    #[error("invalid quantity {0:?}")]
    InvalidQuantity(String),
}

/// One `--item <product-id>[:<quantity>]` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product: ProductId,
    pub quantity: u32,
}

impl std::str::FromStr for ItemSpec {
    type Err = ItemSpecError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, qty)) => (
                id,
                qty.parse()
                    .map_err(|_| ItemSpecError::InvalidQuantity(qty.to_owned()))?,
            ),
            None => (s, 1),
        };
        if id.is_empty() {
            return Err(ItemSpecError::EmptyId);
        }
        Ok(Self {
            product: ProductId::new(id),
            quantity,
        })
    }
}

/// Delivery details for the order.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub pincode: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<CheckoutArgs> for CheckoutForm {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            address: args.address,
            city: args.city,
            pincode: args.pincode,
            notes: args.notes,
        }
    }
}

/// An `--item` that could not be added in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub product: ProductId,
    pub requested: u32,
    pub added: u32,
    pub stock: u32,
}

/// Add every item to `cart`, reporting the ones cut short by stock.
///
/// Repeated items accumulate on the same line, so each request is compared
/// with how much that line actually grew.
///
/// # Errors
///
/// Returns an error if a product does not exist.
pub fn fill_cart(cart: &mut CartStore, items: &[ItemSpec]) -> Result<Vec<Shortfall>> {
    let mut shortfalls = Vec::new();
    for item in items {
        let product = catalog::find(&item.product)
            .ok_or_else(|| AppError::NotFound(format!("product {}", item.product)))?;

        let before = line_quantity(cart, &item.product);
        cart.add_item(product, item.quantity);
        let added = line_quantity(cart, &item.product).saturating_sub(before);

        if added < item.quantity {
            shortfalls.push(Shortfall {
                product: item.product.clone(),
                requested: item.quantity,
                added,
                stock: product.stock,
            });
        }
    }
    Ok(shortfalls)
}

fn line_quantity(cart: &CartStore, id: &ProductId) -> u32 {
    cart.get(id).map_or(0, |line| line.quantity)
}

/// Fill a cart from `items` and submit it.
///
/// # Errors
///
/// Returns an error if a product does not exist or the order is rejected.
pub async fn place_order(
    config: &StorefrontConfig,
    items: &[ItemSpec],
    details: CheckoutArgs,
) -> Result<()> {
    let mut state = AppState::new(
        config,
        FileStorage::open(&config.storage_path),
        DocumentStyle::new(),
    );

    for shortfall in fill_cart(&mut state.cart, items)? {
        warn!(
            product = %shortfall.product,
            requested = shortfall.requested,
            added = shortfall.added,
            stock = shortfall.stock,
            "Quantity limited by available stock"
        );
    }

    let summary = OrderSummary::for_cart(&state.cart);
    info!(
        "Submitting {} items: subtotal {}, shipping {}, total {}",
        summary.item_count, summary.subtotal, summary.shipping, summary.total
    );

    let form = CheckoutForm::from(details);
    let confirmation = state.place_order(&form).await?;

    info!("Order Confirmed! Order ID: {}", confirmation.order_id);
    for line in &confirmation.lines {
        info!("  {} x {} = {}", line.quantity, line.name, line.line_total());
    }
    info!("Total paid: {}", confirmation.summary.total);
    Ok(())
}
