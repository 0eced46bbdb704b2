//! Closed enums shared across the storefront.

use serde::{Deserialize, Serialize};

/// Colour theme mode.
///
/// Persisted as the literal strings `"light"` and `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both modes, in declaration order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// The storage/class-marker spelling of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    /// Exact match only; `"Dark"` or `" dark"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme mode: {s}")),
        }
    }
}

/// Notification category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    /// Order placed / shipped updates.
    Order,
    /// Offers and new flavours.
    Promo,
    /// Housekeeping messages.
    System,
    /// Stock level warnings.
    Stock,
}

impl NotificationCategory {
    /// Icon name shown next to notifications of this category.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Order => "package",
            Self::Promo => "gift",
            Self::System => "bell",
            Self::Stock => "alert-triangle",
        }
    }
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Order => write!(f, "order"),
            Self::Promo => write!(f, "promo"),
            Self::System => write!(f, "system"),
            Self::Stock => write!(f, "stock"),
        }
    }
}

impl std::str::FromStr for NotificationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order" => Ok(Self::Order),
            "promo" => Ok(Self::Promo),
            "system" => Ok(Self::System),
            "stock" => Ok(Self::Stock),
            _ => Err(format!("invalid notification category: {s}")),
        }
    }
}
