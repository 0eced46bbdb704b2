//! Notification listing.

use chrono::Utc;
use saranya_storefront::notifications::{NotificationStore, relative_age};
use tracing::info;

/// Print the session's notifications, newest first.
pub fn list() {
    let store = NotificationStore::new();
    let now = Utc::now();

    info!("{} unread", store.unread_count());
    for n in store.notifications() {
        let marker = if n.read { " " } else { "*" };
        info!(
            "{marker} [{}] {} - {} ({})",
            n.category.icon(),
            n.title,
            n.message,
            relative_age(n.created_at, now)
        );
    }
}
