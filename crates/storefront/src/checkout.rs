//! Checkout: order summary, form validation and simulated order submission.
//!
//! There is no order backend. Submission waits a fixed delay standing in for
//! the network round trip, then always succeeds. The cart is cleared only
//! after that delay has elapsed; a submission dropped before then leaves the
//! cart untouched.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use saranya_core::{ContactError, Email, OrderId, Phone, Pincode, Price};

use crate::cart::{CartLineItem, CartStore};

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: u64 = 500;

/// Flat shipping fee below the free-shipping threshold.
pub const SHIPPING_FEE: u64 = 50;

/// Length of generated order ids.
pub const ORDER_ID_LEN: usize = 8;

const ORDER_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Errors that stop an order from being submitted.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// A required form field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A contact field failed validation.
    #[error("invalid contact details: {0}")]
    InvalidContact(#[from] ContactError),
}

/// Subtotal, shipping and grand total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub item_count: u32,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Summarise the cart as it stands.
    #[must_use]
    pub fn for_cart(cart: &CartStore) -> Self {
        let subtotal = cart.total_price();
        let shipping = if subtotal >= Price::from_units(FREE_SHIPPING_THRESHOLD) {
            Price::ZERO
        } else {
            Price::from_units(SHIPPING_FEE)
        };

        Self {
            item_count: cart.total_items(),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

/// Checkout form as entered.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub notes: String,
}

/// Validated delivery details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingDetails {
    pub name: String,
    pub email: Email,
    pub phone: Option<Phone>,
    pub address: String,
    pub city: String,
    pub pincode: Pincode,
    pub notes: Option<String>,
}

impl CheckoutForm {
    /// Check required fields and parse contact details.
    ///
    /// Phone and notes are optional; everything else must be non-blank.
    ///
    /// # Errors
    ///
    /// Returns the first missing or malformed field.
    pub fn validate(&self) -> Result<ShippingDetails, CheckoutError> {
        let name = required("name", &self.name)?;
        let email = Email::parse(required("email", &self.email)?)?;
        let address = required("address", &self.address)?;
        let city = required("city", &self.city)?;
        let pincode = Pincode::parse(required("pincode", &self.pincode)?)?;
        let phone = optional(&self.phone).map(Phone::parse).transpose()?;
        let notes = optional(&self.notes).map(str::to_owned);

        Ok(ShippingDetails {
            name: name.to_owned(),
            email,
            phone,
            address: address.to_owned(),
            city: city.to_owned(),
            pincode,
            notes,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, CheckoutError> {
    optional(value).ok_or(CheckoutError::MissingField(field))
}

fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub details: ShippingDetails,
    pub lines: Vec<CartLineItem>,
    pub summary: OrderSummary,
    pub placed_at: DateTime<Utc>,
}

/// Simulated order submission.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    delay: Duration,
}

impl CheckoutService {
    /// Create a service that takes `delay` to "submit" each order.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured submission delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Submit the cart as an order.
    ///
    /// The cart is borrowed mutably for the whole submission, so a second
    /// submit cannot start until this one resolves.
    ///
    /// # Errors
    ///
    /// Returns an error, without waiting and without touching the cart, if the
    /// cart is empty or the form is invalid.
    #[instrument(skip(self, form, cart), fields(items = cart.total_items()))]
    pub async fn submit(
        &self,
        form: &CheckoutForm,
        cart: &mut CartStore,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let details = form.validate()?;

        tokio::time::sleep(self.delay).await;

        let confirmation = OrderConfirmation {
            order_id: generate_order_id(),
            details,
            lines: cart.items().to_vec(),
            summary: OrderSummary::for_cart(cart),
            placed_at: Utc::now(),
        };
        cart.clear();

        info!(
            order_id = %confirmation.order_id,
            total = %confirmation.summary.total,
            "Order placed"
        );
        Ok(confirmation)
    }
}

/// Random uppercase alphanumeric order id.
#[must_use]
pub fn generate_order_id() -> OrderId {
    let mut rng = rand::rng();
    let id: String = (0..ORDER_ID_LEN)
        .filter_map(|_| {
            ORDER_ID_ALPHABET
                .get(rng.random_range(0..ORDER_ID_ALPHABET.len()))
                .map(|&b| char::from(b))
        })
        .collect();
    OrderId::new(id)
}
