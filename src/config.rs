//! Configuration Module
//!
//! Loads cache tuning from environment variables with sensible defaults.

use std::env;

// == Config ==
/// Tuning for the property cache and its eviction task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of identities to pre-allocate room for
    pub initial_capacity: usize,
    /// Number of pending eviction batches the channel buffers
    pub eviction_channel_capacity: usize,
}

impl Config {
    // == From Environment ==
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    /// * `PROPERTY_CACHE_CAPACITY` - Pre-allocated identity slots (default: 256)
    /// * `EVICTION_CHANNEL_CAPACITY` - Buffered eviction batches (default: 64)
    ///
    /// Missing or unparseable values fall back to the defaults. A zero channel
    /// capacity is rejected since tokio channels need room for one message.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            initial_capacity: env::var("PROPERTY_CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.initial_capacity),
            eviction_channel_capacity: env::var("EVICTION_CHANNEL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.eviction_channel_capacity),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
            eviction_channel_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.initial_capacity, 256);
        assert_eq!(config.eviction_channel_capacity, 64);
    }

    // Both env cases live in one test so parallel tests never race on the
    // process environment.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PROPERTY_CACHE_CAPACITY");
        env::remove_var("EVICTION_CHANNEL_CAPACITY");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("PROPERTY_CACHE_CAPACITY", "1024");
        env::set_var("EVICTION_CHANNEL_CAPACITY", "0");
        let config = Config::from_env();
        assert_eq!(config.initial_capacity, 1024);
        assert_eq!(config.eviction_channel_capacity, 64);

        env::set_var("PROPERTY_CACHE_CAPACITY", "lots");
        assert_eq!(Config::from_env().initial_capacity, 256);

        env::remove_var("PROPERTY_CACHE_CAPACITY");
        env::remove_var("EVICTION_CHANNEL_CAPACITY");
    }
}
