//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries each cache can hold
    pub max_entries: usize,
    /// Default TTL in seconds for the general-purpose cache
    pub default_ttl: u64,
    /// TTL in seconds for clothing catalog listings
    pub clothing_ttl: u64,
    /// TTL in seconds for personalised recommendations
    pub recommendation_ttl: u64,
    /// Admin HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum entries per cache (default: 1000)
    /// - `DEFAULT_TTL` - General-purpose TTL in seconds (default: 300)
    /// - `CLOTHING_TTL` - Catalog TTL in seconds (default: 600)
    /// - `RECOMMENDATION_TTL` - Recommendation TTL in seconds (default: 1800)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            default_ttl: env_or("DEFAULT_TTL", defaults.default_ttl),
            clothing_ttl: env_or("CLOTHING_TTL", defaults.clothing_ttl),
            recommendation_ttl: env_or("RECOMMENDATION_TTL", defaults.recommendation_ttl),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    /// Rejects values the caches cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            return Err(CacheError::InvalidRequest(
                "MAX_ENTRIES must be greater than zero".to_string(),
            ));
        }
        for (name, ttl) in [
            ("DEFAULT_TTL", self.default_ttl),
            ("CLOTHING_TTL", self.clothing_ttl),
            ("RECOMMENDATION_TTL", self.recommendation_ttl),
        ] {
            if ttl == 0 {
                return Err(CacheError::InvalidTtl(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }
        if self.cleanup_interval == 0 {
            return Err(CacheError::InvalidRequest(
                "CLEANUP_INTERVAL must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    pub fn clothing_ttl(&self) -> Duration {
        Duration::from_secs(self.clothing_ttl)
    }

    pub fn recommendation_ttl(&self) -> Duration {
        Duration::from_secs(self.recommendation_ttl)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            default_ttl: 300,
            clothing_ttl: 600,
            recommendation_ttl: 1800,
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.default_ttl(), Duration::from_secs(300));
        assert_eq!(config.clothing_ttl(), Duration::from_secs(600));
        assert_eq!(config.recommendation_ttl(), Duration::from_secs(1800));
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        for name in [
            "MAX_ENTRIES",
            "DEFAULT_TTL",
            "CLOTHING_TTL",
            "RECOMMENDATION_TTL",
            "SERVER_PORT",
            "CLEANUP_INTERVAL",
        ] {
            env::remove_var(name);
        }

        assert_eq!(Config::from_env(), Config::default());
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let config = Config {
            clothing_ttl: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidTtl(_))));
    }

    #[test]
    fn test_validate_rejects_zero_entries_and_interval() {
        let no_entries = Config {
            max_entries: 0,
            ..Config::default()
        };
        assert!(no_entries.validate().is_err());

        let no_interval = Config {
            cleanup_interval: 0,
            ..Config::default()
        };
        assert!(no_interval.validate().is_err());
    }
}
