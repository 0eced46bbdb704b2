//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SARANYA_STORAGE_PATH` - JSON file backing durable storage
//!   (default: `.saranya-storage.json`)
//! - `SARANYA_COLOR_SCHEME` - platform colour-scheme hint, `light` or `dark`
//! - `SARANYA_CHECKOUT_DELAY_MS` - simulated order submission delay (default: 1500)
//! - `SARANYA_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::theme::ColorSchemeHint;

const DEFAULT_STORAGE_PATH: &str = ".saranya-storage.json";
const DEFAULT_CHECKOUT_DELAY_MS: &str = "1500";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// File backing durable key/value storage
    pub storage_path: PathBuf,
    /// Ambient colour-scheme preference used when no theme is persisted
    pub color_scheme: ColorSchemeHint,
    /// Simulated order submission delay
    pub checkout_delay: Duration,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            color_scheme: ColorSchemeHint::NoPreference,
            checkout_delay: Duration::from_millis(1500),
            log_format: LogFormat::Pretty,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognised value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let storage_path = PathBuf::from(get_or_default("SARANYA_STORAGE_PATH", DEFAULT_STORAGE_PATH));

        let color_scheme = match lookup("SARANYA_COLOR_SCHEME").as_deref() {
            None | Some("") => ColorSchemeHint::NoPreference,
            Some("light") => ColorSchemeHint::Light,
            Some("dark") => ColorSchemeHint::Dark,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "SARANYA_COLOR_SCHEME".to_string(),
                    format!("expected light or dark, got {other}"),
                ));
            }
        };

        let checkout_delay = get_or_default("SARANYA_CHECKOUT_DELAY_MS", DEFAULT_CHECKOUT_DELAY_MS)
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SARANYA_CHECKOUT_DELAY_MS".to_string(), e.to_string())
            })?;

        let log_format = match get_or_default("SARANYA_LOG_FORMAT", "pretty").as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "SARANYA_LOG_FORMAT".to_string(),
                    format!("expected pretty or json, got {other}"),
                ));
            }
        };

        Ok(Self {
            storage_path,
            color_scheme,
            checkout_delay,
            log_format,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.storage_path, PathBuf::from(".saranya-storage.json"));
        assert_eq!(config.color_scheme, ColorSchemeHint::NoPreference);
        assert_eq!(config.checkout_delay, Duration::from_millis(1500));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SARANYA_STORAGE_PATH", "/tmp/prefs.json"),
            ("SARANYA_COLOR_SCHEME", "dark"),
            ("SARANYA_CHECKOUT_DELAY_MS", "0"),
            ("SARANYA_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.color_scheme, ColorSchemeHint::Dark);
        assert_eq!(config.checkout_delay, Duration::ZERO);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("SARANYA_COLOR_SCHEME", "blue")]).is_err());
        assert!(load(&[("SARANYA_CHECKOUT_DELAY_MS", "soon")]).is_err());
        assert!(load(&[("SARANYA_LOG_FORMAT", "xml")]).is_err());
    }
}
