use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cards::DECK_SIZE;
use crate::errors::ConfigError;

/// Seed used when none is configured, keeping every game reproducible.
pub const DEFAULT_SEED: u64 = 0x5E7_5E7;

/// Environment variable overriding the configured seed.
pub const SEED_ENV: &str = "SETGAME_SEED";

/// What the engine does with mutating calls once the game has ended.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndPolicy {
    /// Keep accepting calls after the game ended
    #[default]
    Lenient,
    /// Reject mutating calls with `GameError::GameEnded`
    Strict,
}

/// Engine tuning: RNG seed, table capacities and end-of-game policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub seed: Option<u64>,
    /// Cards dealt by a regular draw
    pub table_size: usize,
    /// Capacity when extra cards are added because no set is visible
    pub extended_table_size: usize,
    pub end_policy: EndPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            table_size: 12,
            extended_table_size: 15,
            end_policy: EndPolicy::Lenient,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Parses a TOML document; missing keys fall back to the defaults.
    ///
    /// ```
    /// use setgame_engine::config::{EndPolicy, EngineConfig};
    ///
    /// let cfg = EngineConfig::from_toml_str("seed = 7\nend_policy = \"strict\"").unwrap();
    /// assert_eq!(cfg.seed, Some(7));
    /// assert_eq!(cfg.table_size, 12);
    /// assert_eq!(cfg.end_policy, EndPolicy::Strict);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Applies `SETGAME_SEED` on top of the current values, when set.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(seed) = std::env::var(SEED_ENV) {
            if !seed.is_empty() {
                self.seed = Some(
                    seed.parse()
                        .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed}")))?,
                );
            }
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_size < 3 {
            return Err(ConfigError::Invalid(format!(
                "table_size must be at least 3, got {}",
                self.table_size
            )));
        }
        if self.extended_table_size < self.table_size {
            return Err(ConfigError::Invalid(format!(
                "extended_table_size ({}) is smaller than table_size ({})",
                self.extended_table_size, self.table_size
            )));
        }
        if self.extended_table_size > DECK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "extended_table_size must not exceed {DECK_SIZE}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_twelve_and_fifteen() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.table_size, 12);
        assert_eq!(cfg.extended_table_size, 15);
        assert_eq!(cfg.effective_seed(), DEFAULT_SEED);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_capacities() {
        let err = EngineConfig::from_toml_str("table_size = 12\nextended_table_size = 9")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_tiny_table_and_oversized_extension() {
        assert!(EngineConfig::from_toml_str("table_size = 2").is_err());
        assert!(EngineConfig::from_toml_str("extended_table_size = 82").is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("seed = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
