//! Session state shared by every consumer.

use saranya_core::NotificationCategory;
use tracing::info;

use crate::cart::CartStore;
use crate::checkout::{CheckoutError, CheckoutForm, CheckoutService, OrderConfirmation};
use crate::config::StorefrontConfig;
use crate::notifications::{NotificationDraft, NotificationStore};
use crate::storage::KeyValueStorage;
use crate::style::{DocumentStyle, StyleSurface};
use crate::theme::ThemeStore;

/// The stores for one browsing session.
///
/// Constructed once at start-up and handed to consumers by reference; each
/// store has exactly one owner, so every mutation goes through `&mut`.
#[derive(Debug)]
pub struct AppState<S, D = DocumentStyle> {
    pub cart: CartStore,
    pub notifications: NotificationStore,
    pub theme: ThemeStore<S, D>,
    checkout: CheckoutService,
}

impl<S: KeyValueStorage, D: StyleSurface> AppState<S, D> {
    /// Create a session: empty cart, sample notifications, and theme
    /// preferences restored from `storage`.
    pub fn new(config: &StorefrontConfig, storage: S, surface: D) -> Self {
        Self {
            cart: CartStore::new(),
            notifications: NotificationStore::new(),
            theme: ThemeStore::load(storage, surface, config.color_scheme),
            checkout: CheckoutService::new(config.checkout_delay),
        }
    }

    /// Get a reference to the checkout service.
    #[must_use]
    pub const fn checkout(&self) -> &CheckoutService {
        &self.checkout
    }

    /// Submit the cart and record an order notification on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty or the form is invalid.
    pub async fn place_order(
        &mut self,
        form: &CheckoutForm,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let confirmation = self.checkout.submit(form, &mut self.cart).await?;

        self.notifications.add(NotificationDraft::new(
            NotificationCategory::Order,
            "Order Placed Successfully!",
            format!(
                "Order {} confirmed. You will receive a confirmation email shortly.",
                confirmation.order_id
            ),
        ));
        info!(order_id = %confirmation.order_id, "Recorded order notification");

        Ok(confirmation)
    }
}
