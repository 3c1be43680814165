//! Page-level game configuration
//!
//! Read once at startup from an optional inline JSON document. Nothing is
//! ever written back.

use serde::{Deserialize, Serialize};

use crate::assets::AssetManifest;
use crate::consts::MUSIC_VOLUME;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay balance
    pub tuning: Tuning,
    /// Images and music to load
    pub assets: AssetManifest,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// CSS `cursor` value applied to the canvas
    pub cursor: String,
    /// Fixed RNG seed; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            assets: AssetManifest::default(),
            music_volume: MUSIC_VOLUME,
            cursor: "url('assets/cursor.cur'), auto".to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::InvalidValue {
                name: "music_volume",
            });
        }
        if self.assets.sprites.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "assets.sprites",
            });
        }
        Ok(())
    }
}
