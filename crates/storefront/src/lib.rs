//! Saranya Storefront library.
//!
//! Session-scoped state for the storefront: the cart, the notification bell
//! and theme preferences, plus the catalog, wholesale pricing and a simulated
//! checkout that consume them, and the store news feed.
//!
//! # Architecture
//!
//! - Stores are plain owned values bundled in [`state::AppState`]; there is no
//!   global registry
//! - Derived values (cart totals, unread count, HSL style values) are computed
//!   on read
//! - Theme preferences persist through the [`storage::KeyValueStorage`] trait
//!   and are mirrored onto a [`style::StyleSurface`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod news;
pub mod notifications;
pub mod pricing;
pub mod state;
pub mod storage;
pub mod style;
pub mod theme;
