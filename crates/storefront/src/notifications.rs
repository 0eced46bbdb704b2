//! Notification store.
//!
//! Notifications are kept newest first. They are only ever created, marked
//! read, or cleared in bulk; the unread count is derived on every read.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, instrument};

use saranya_core::{NotificationCategory, NotificationId};

/// A notification shown in the bell panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied part of a new notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
}

impl NotificationDraft {
    /// Build a draft.
    #[must_use]
    pub fn new(
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            category,
        }
    }
}

/// Notifications for one session.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
    last_issued: i64,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore {
    /// A store holding the welcome, new-flavour and low-stock samples.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// A store with no notifications.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            notifications: Vec::new(),
            last_issued: 0,
        }
    }

    /// The sample notifications, timestamped relative to `now`.
    #[must_use]
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        let sample = |id: &str, draft: NotificationDraft, age: Duration| Notification {
            id: NotificationId::new(id),
            title: draft.title,
            message: draft.message,
            category: draft.category,
            read: false,
            created_at: now - age,
        };

        Self {
            notifications: vec![
                sample(
                    "1",
                    NotificationDraft::new(
                        NotificationCategory::Promo,
                        "Welcome to Saranya Ice Creams!",
                        "Thank you for visiting. Enjoy 10% off on your first order!",
                    ),
                    Duration::zero(),
                ),
                sample(
                    "2",
                    NotificationDraft::new(
                        NotificationCategory::Promo,
                        "New Flavor Alert",
                        "Try our new Mango Passion fruit ice cream - limited edition!",
                    ),
                    Duration::hours(1),
                ),
                sample(
                    "3",
                    NotificationDraft::new(
                        NotificationCategory::Stock,
                        "Low Stock Warning",
                        "Belgian Chocolate is running low on stock.",
                    ),
                    Duration::hours(2),
                ),
            ],
            last_issued: 0,
        }
    }

    /// All notifications, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Look up a notification by id.
    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| &n.id == id)
    }

    /// Number of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Prepend a new unread notification stamped with the current time.
    pub fn add(&mut self, draft: NotificationDraft) -> NotificationId {
        self.add_at(draft, Utc::now())
    }

    /// Prepend a new unread notification stamped with `now`.
    ///
    /// Ids are the creation time in milliseconds, bumped forward when two
    /// notifications land in the same millisecond.
    #[instrument(skip(self, draft), fields(category = %draft.category))]
    pub fn add_at(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> NotificationId {
        let millis = now.timestamp_millis().max(self.last_issued.saturating_add(1));
        self.last_issued = millis;
        let id = NotificationId::new(millis.to_string());

        debug!(%id, title = %draft.title, "Adding notification");
        self.notifications.insert(
            0,
            Notification {
                id: id.clone(),
                title: draft.title,
                message: draft.message,
                category: draft.category,
                read: false,
                created_at: now,
            },
        );
        id
    }

    /// Mark one notification read. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn mark_read(&mut self, id: &NotificationId) {
        if let Some(n) = self.notifications.iter_mut().find(|n| &n.id == id) {
            n.read = true;
        }
    }

    /// Mark every notification read.
    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    /// Remove every notification.
    pub fn clear(&mut self) {
        debug!(count = self.notifications.len(), "Clearing notifications");
        self.notifications.clear();
    }
}

/// Human-readable age of a notification, e.g. `"about 2 hours ago"`.
#[must_use]
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - created_at).num_seconds().max(0);
    let minutes = (secs + 30) / 60;
    let hours = (minutes + 30) / 60;
    let days = (hours + 12) / 24;

    match secs {
        s if s < 30 => "less than a minute ago".to_owned(),
        s if s < 90 => "1 minute ago".to_owned(),
        _ if minutes < 45 => format!("{minutes} minutes ago"),
        _ if minutes < 90 => "about 1 hour ago".to_owned(),
        _ if minutes < 24 * 60 => format!("about {hours} hours ago"),
        _ if minutes < 42 * 60 => "1 day ago".to_owned(),
        _ => format!("{days} days ago"),
    }
}
