//! Console tunables.

use devcon_types::error::{DevconError, Result};
use serde::Deserialize;

/// Console engine configuration (optionally loaded from TOML).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Maximum suggestions returned per query.
    pub max_suggestions: usize,
    /// Edit-distance radius for the fuzzy fallback.
    pub fuzzy_radius: usize,
    /// Debounce window for suggestion recomputation, in milliseconds.
    pub debounce_window_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            fuzzy_radius: 1,
            debounce_window_ms: 20,
        }
    }
}

impl ConsoleConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Debounce window in nanoseconds, for comparison against the clock.
    pub fn debounce_window_nanos(&self) -> u64 {
        self.debounce_window_ms * 1_000_000
    }

    fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(DevconError::Config(
                "max_suggestions must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
