//! Core types for the Saranya storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod contact;
pub mod id;
pub mod price;
pub mod status;

pub use color::{ColorError, HexColor, Hsl};
pub use contact::{ContactError, Email, Phone, Pincode};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use status::*;
