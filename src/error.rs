//! Startup faults
//!
//! The simulation itself never fails. Everything that can go wrong happens
//! before the first frame: bad configuration, missing DOM elements, assets
//! that did not load. Any of these keeps the game from starting.

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `min`/`max` pair is empty or inverted
    #[error("invalid range for `{name}`: min must be below max")]
    InvalidRange { name: &'static str },

    /// A scalar is outside its allowed domain
    #[error("invalid value for `{name}`")]
    InvalidValue { name: &'static str },
}

/// Errors that prevent a game session from starting
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("sprite catalog is empty")]
    EmptySpriteCatalog,

    #[error("sprite {index} has a non-positive natural size")]
    InvalidSpriteSize { index: usize },

    #[error("failed to load asset `{path}`")]
    AssetLoad { path: String },

    #[error("missing page element `#{id}`")]
    MissingElement { id: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
