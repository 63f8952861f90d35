//! Runtime configuration for the cart system.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const BUFFER_SIZE_VAR: &str = "CART_BUFFER_SIZE";
pub const GATEWAY_LATENCY_VAR: &str = "CART_GATEWAY_LATENCY_MS";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// Knobs for [`CartSystem`](crate::lifecycle::CartSystem).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Capacity of the store actor's mailbox.
    pub buffer_size: usize,
    /// Delay used by the simulated checkout gateway in the demo.
    pub gateway_latency_ms: u64,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            gateway_latency_ms: 500,
        }
    }
}

impl CartConfig {
    /// Defaults, overridden by `CART_BUFFER_SIZE` and `CART_GATEWAY_LATENCY_MS` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(BUFFER_SIZE_VAR) {
            config.buffer_size = parse(BUFFER_SIZE_VAR, &value)?;
        }
        if let Some(value) = lookup(GATEWAY_LATENCY_VAR) {
            config.gateway_latency_ms = parse(GATEWAY_LATENCY_VAR, &value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// tokio's mpsc channel panics on a zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Zero(BUFFER_SIZE_VAR));
        }
        Ok(())
    }

    pub fn gateway_latency(&self) -> Duration {
        Duration::from_millis(self.gateway_latency_ms)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}
