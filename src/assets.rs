//! Sprite catalog and asset manifest
//!
//! Entities never own image data. They carry a [`SpriteId`] into the catalog,
//! which only knows each sprite's natural pixel size. The platform layer keeps
//! the decoded images in the same order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SetupError;
use crate::sim::RandomSource;

/// Index of a sprite in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub usize);

/// Natural sizes of the fixed sprite set
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    sizes: Vec<Vec2>,
}

impl SpriteCatalog {
    /// Build a catalog, rejecting an empty set or a sprite with no area
    pub fn new(sizes: Vec<Vec2>) -> Result<Self, SetupError> {
        if sizes.is_empty() {
            return Err(SetupError::EmptySpriteCatalog);
        }
        if let Some(index) = sizes.iter().position(|s| !(s.x > 0.0 && s.y > 0.0)) {
            return Err(SetupError::InvalidSpriteSize { index });
        }
        Ok(Self { sizes })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Natural pixel size of a sprite
    pub fn natural_size(&self, id: SpriteId) -> Vec2 {
        self.sizes[id.0]
    }

    /// Uniformly pick a sprite
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> SpriteId {
        SpriteId(rng.index(self.sizes.len()))
    }
}

/// Paths of every asset the page needs before the game can start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub background: String,
    pub sprites: Vec<String>,
    pub music: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            background: "assets/bg_halloween.jpg".to_string(),
            sprites: vec![
                "assets/sprite_calavera1.png".to_string(),
                "assets/sprite_calavera2.png".to_string(),
                "assets/sprite_pumpkin1.png".to_string(),
                "assets/sprite_fantasma1.png".to_string(),
            ],
            music: "assets/bg_music.mp3".to_string(),
        }
    }
}

impl AssetManifest {
    /// Every image that must load before the first frame (background first)
    pub fn images(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.background.as_str()).chain(self.sprites.iter().map(String::as_str))
    }
}
