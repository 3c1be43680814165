//! Sprite Catch - a click-the-sprites canvas mini-game
//!
//! Core modules:
//! - `sim`: Seedable simulation (spawning, motion, hit-testing, scoring)
//! - `tuning`: Data-driven game balance
//! - `config`: Asset manifest, music and cursor settings
//! - `assets`: Sprite catalog shared by all entities
//! - `platform`: Browser front end (asset loading, canvas painting, audio)

pub mod assets;
pub mod config;
pub mod error;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use assets::{AssetManifest, SpriteCatalog, SpriteId};
pub use config::GameConfig;
pub use error::{ConfigError, SetupError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Time between spawn waves (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 900.0;
    /// Probability that a spawn wave brings a second entity
    pub const BURST_CHANCE: f32 = 0.08;
    /// Entities spawned synchronously at game start
    pub const INITIAL_SPAWN_COUNT: u32 = 6;

    /// Random scale applied to a sprite's natural size
    pub const SCALE_MIN: f32 = 0.55;
    pub const SCALE_MAX: f32 = 0.95;
    /// Fixed factor applied on top of the random scale
    pub const SIZE_FACTOR: f32 = 0.55;
    /// Spawn positions keep this distance from every canvas edge
    pub const EDGE_INSET: f32 = 20.0;

    pub const SPEED_MIN: f32 = 0.25;
    pub const SPEED_MAX: f32 = 1.6;
    pub const LIFESPAN_MIN_MS: f32 = 7000.0;
    pub const LIFESPAN_MAX_MS: f32 = 20000.0;

    /// Per-tick step multiplier for straight-line kinds
    pub const LINEAR_FACTOR: f32 = 1.8;
    /// Per-tick step multiplier for zigzag
    pub const ZIGZAG_FACTOR: f32 = 1.2;
    /// Zigzag steering added to velocity each tick
    pub const ZIGZAG_STEER: f32 = 0.02;
    /// Initial zigzag velocity components are drawn in [-range, range)
    pub const ZIGZAG_VELOCITY_RANGE: f32 = 0.8;
    /// Phase skew per position in the live list (ms)
    pub const ZIGZAG_INDEX_SKEW_MS: f64 = 100.0;
    pub const ZIGZAG_PERIOD_X_MS: f64 = 400.0;
    pub const ZIGZAG_PERIOD_Y_MS: f64 = 350.0;

    /// Orbit center offset from the spawn point, drawn in [-x, x) and [-y, y)
    pub const ORBIT_OFFSET_X: f32 = 60.0;
    pub const ORBIT_OFFSET_Y: f32 = 40.0;
    pub const ORBIT_RADIUS_MIN: f32 = 30.0;
    pub const ORBIT_RADIUS_MAX: f32 = 110.0;
    /// Base angular step per tick (radians), scaled by speed * ORBIT_SPEED_FACTOR
    pub const ORBIT_ANGULAR_STEP: f32 = 0.015;
    pub const ORBIT_SPEED_FACTOR: f32 = 1.6;

    /// Per-entity, per-tick probability of a random nudge
    pub const JITTER_CHANCE: f32 = 0.01;
    pub const JITTER_AMOUNT: f32 = 0.8;

    /// Entities further than this beyond any canvas edge are removed
    pub const DESPAWN_MARGIN: f32 = 200.0;

    /// Hit score: max(min_base, base - (w + h) / divisor) + speed * bonus
    pub const SCORE_BASE: f32 = 50.0;
    pub const SCORE_MIN_BASE: f32 = 1.0;
    pub const SCORE_SIZE_DIVISOR: f32 = 10.0;
    pub const SCORE_SPEED_BONUS: f32 = 5.0;
    /// Points lost on a click that hits nothing
    pub const MISS_PENALTY: u64 = 2;

    /// Click ripple
    pub const FEEDBACK_RADIUS: f32 = 6.0;
    pub const FEEDBACK_DURATION_MS: f64 = 600.0;
    /// Ripple radius grows by one pixel every this many ms
    pub const FEEDBACK_GROWTH_MS: f64 = 40.0;
    pub const FEEDBACK_LINE_WIDTH: f32 = 2.0;

    /// Global alpha used when drawing sprites
    pub const SPRITE_ALPHA: f32 = 0.98;

    /// Background music volume
    pub const MUSIC_VOLUME: f32 = 0.45;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
