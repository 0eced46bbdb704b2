//! Saranya Core - Shared types library.
//!
//! This crate provides common types used across all storefront components:
//! - `storefront` - Session state stores (cart, notifications, theme) and checkout
//! - `cli` - Command-line front end over the stores
//!
//! # Architecture
//!
//! The core crate contains only types and pure conversions - no I/O, no
//! storage access, no clocks. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, contact details, colours and
//!   closed enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
