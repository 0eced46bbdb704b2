//! Subcommand implementations.

pub mod checkout;
pub mod news;
pub mod notifications;
pub mod products;
pub mod theme;
