//! Integration tests for the notification store.

#![allow(clippy::unwrap_used)]

use saranya_core::{NotificationCategory, NotificationId};
use saranya_storefront::notifications::{NotificationDraft, NotificationStore};

#[test]
fn test_mark_one_read() {
    let mut store = NotificationStore::new();
    assert_eq!(store.unread_count(), 3);

    store.mark_read(&NotificationId::new("2"));

    assert_eq!(store.unread_count(), 2);
    assert!(store.get(&NotificationId::new("2")).unwrap().read);
    assert!(!store.get(&NotificationId::new("1")).unwrap().read);
    assert!(!store.get(&NotificationId::new("3")).unwrap().read);
}

#[test]
fn test_mark_all_read_always_zero() {
    let mut store = NotificationStore::new();
    store.add(NotificationDraft::new(
        NotificationCategory::System,
        "Maintenance",
        "Checkout will be unavailable tonight.",
    ));
    store.mark_read(&NotificationId::new("1"));
    store.mark_all_read();
    assert_eq!(store.unread_count(), 0);

    store.clear();
    store.mark_all_read();
    assert_eq!(store.unread_count(), 0);
}

#[test]
fn test_newest_first() {
    let mut store = NotificationStore::new();
    let first = store.add(NotificationDraft::new(NotificationCategory::Stock, "a", "a"));
    let second = store.add(NotificationDraft::new(NotificationCategory::Order, "b", "b"));

    let ids: Vec<_> = store.notifications().iter().map(|n| n.id.clone()).collect();
    assert_eq!(ids.first(), Some(&second));
    assert_eq!(ids.get(1), Some(&first));
    assert_eq!(ids.get(2), Some(&NotificationId::new("1")));
}
