//! Relayer configuration

use eyre::{eyre, Result};
use std::env;

/// Delivery worker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayerConfig {
    /// Account the routers accept `Deliver` and `ConfirmDelivery` from
    pub relayer_address: String,
    /// Attempts per message before it is dead-lettered
    pub max_delivery_attempts: u32,
    /// Outbox page size when polling a router
    pub batch_size: u32,
}

impl Default for RelayerConfig {
    fn default() -> Self {
        Self {
            relayer_address: "relayer".to_string(),
            max_delivery_attempts: 3,
            batch_size: 30,
        }
    }
}

impl RelayerConfig {
    /// Load configuration from environment
    ///
    /// Every variable is optional; unset ones keep their default.
    pub fn load() -> Result<Self> {
        // Try to load .env file
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded .env from {:?}", path);
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            relayer_address: lookup("RELAYER_ADDRESS").unwrap_or(defaults.relayer_address),
            max_delivery_attempts: parse_var(&lookup, "MAX_DELIVERY_ATTEMPTS")?
                .unwrap_or(defaults.max_delivery_attempts),
            batch_size: parse_var(&lookup, "RELAYER_BATCH_SIZE")?.unwrap_or(defaults.batch_size),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.relayer_address.trim().is_empty() {
            return Err(eyre!("RELAYER_ADDRESS must not be empty"));
        }
        if self.max_delivery_attempts == 0 {
            return Err(eyre!("MAX_DELIVERY_ATTEMPTS must be at least 1"));
        }
        if self.batch_size == 0 {
            return Err(eyre!("RELAYER_BATCH_SIZE must be at least 1"));
        }
        Ok(())
    }
}

fn parse_var<F>(lookup: &F, name: &str) -> Result<Option<u32>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| eyre!("Invalid {}: {}", name, value)),
        None => Ok(None),
    }
}
