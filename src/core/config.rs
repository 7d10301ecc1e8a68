//! Game configuration.
//!
//! `TrailConfig` holds the numeric rules of a game: how many players may
//! sit down, the card caps, and starting hands. It can be built in code
//! with the `with_*` methods or read from TOML; keys missing from the
//! file keep their defaults.
//!
//! ```
//! use trilha::core::TrailConfig;
//!
//! let config = TrailConfig::from_toml_str("max_players = 4\nseed = 9").unwrap();
//! assert_eq!(config.max_players, 4);
//! assert_eq!(config.max_cards, 10);
//! assert_eq!(config.seed, Some(9));
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::player::PlayerColor;
use crate::error::ConfigError;

/// Numeric rules of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Fewest players allowed at setup.
    pub min_players: usize,

    /// Most players allowed at setup. Bounded by the color palette.
    pub max_players: usize,

    /// Cap for both activity and stress cards.
    pub max_cards: u8,

    /// Stress cards each player starts with.
    pub starting_stress: u8,

    /// Activity cards each player starts with.
    pub starting_activity: u8,

    /// Cosmetic faces shown before a rolled value settles.
    pub tumble_frames: usize,

    /// Dice seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 6,
            max_cards: 10,
            starting_stress: 10,
            starting_activity: 0,
            tumble_frames: 15,
            seed: None,
        }
    }
}

impl TrailConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    #[must_use]
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_max_cards(mut self, max_cards: u8) -> Self {
        self.max_cards = max_cards;
        self
    }

    #[must_use]
    pub fn with_starting_cards(mut self, activity: u8, stress: u8) -> Self {
        self.starting_activity = activity;
        self.starting_stress = stress;
        self
    }

    #[must_use]
    pub fn with_tumble_frames(mut self, frames: usize) -> Self {
        self.tumble_frames = frames;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the rules are internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 2 {
            return Err(ConfigError::Invalid(format!(
                "min_players must be at least 2, got {}",
                self.min_players
            )));
        }

        if self.min_players > self.max_players {
            return Err(ConfigError::Invalid(format!(
                "min_players ({}) exceeds max_players ({})",
                self.min_players, self.max_players
            )));
        }

        if self.max_players > PlayerColor::ALL.len() {
            return Err(ConfigError::Invalid(format!(
                "max_players ({}) exceeds the {} available colors",
                self.max_players,
                PlayerColor::ALL.len()
            )));
        }

        if self.starting_stress == 0 || self.starting_stress > self.max_cards {
            return Err(ConfigError::Invalid(format!(
                "starting_stress must be in 1..={}, got {}",
                self.max_cards, self.starting_stress
            )));
        }

        if self.starting_activity > self.max_cards {
            return Err(ConfigError::Invalid(format!(
                "starting_activity must be at most {}, got {}",
                self.max_cards, self.starting_activity
            )));
        }

        Ok(())
    }
}
