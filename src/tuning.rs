//! Data-driven game balance
//!
//! Every gameplay number lives here so a page can override it through the
//! JSON config without a rebuild. Missing fields fall back to [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning ===
    pub spawn_interval_ms: f64,
    pub burst_chance: f32,
    pub initial_spawn_count: u32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub size_factor: f32,
    pub edge_inset: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub lifespan_min_ms: f32,
    pub lifespan_max_ms: f32,

    // === Motion ===
    pub linear_factor: f32,
    pub zigzag_factor: f32,
    pub zigzag_steer: f32,
    pub zigzag_velocity_range: f32,
    pub zigzag_index_skew_ms: f64,
    pub zigzag_period_x_ms: f64,
    pub zigzag_period_y_ms: f64,
    pub orbit_offset_x: f32,
    pub orbit_offset_y: f32,
    pub orbit_radius_min: f32,
    pub orbit_radius_max: f32,
    pub orbit_angular_step: f32,
    pub orbit_speed_factor: f32,
    pub jitter_chance: f32,
    pub jitter_amount: f32,
    pub despawn_margin: f32,

    // === Scoring ===
    pub score_base: f32,
    pub score_min_base: f32,
    pub score_size_divisor: f32,
    pub score_speed_bonus: f32,
    pub miss_penalty: u64,

    // === Click feedback ===
    pub feedback_radius: f32,
    pub feedback_duration_ms: f64,
    pub feedback_growth_ms: f64,
    pub feedback_line_width: f32,

    pub sprite_alpha: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            burst_chance: BURST_CHANCE,
            initial_spawn_count: INITIAL_SPAWN_COUNT,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            size_factor: SIZE_FACTOR,
            edge_inset: EDGE_INSET,
            speed_min: SPEED_MIN,
            speed_max: SPEED_MAX,
            lifespan_min_ms: LIFESPAN_MIN_MS,
            lifespan_max_ms: LIFESPAN_MAX_MS,

            linear_factor: LINEAR_FACTOR,
            zigzag_factor: ZIGZAG_FACTOR,
            zigzag_steer: ZIGZAG_STEER,
            zigzag_velocity_range: ZIGZAG_VELOCITY_RANGE,
            zigzag_index_skew_ms: ZIGZAG_INDEX_SKEW_MS,
            zigzag_period_x_ms: ZIGZAG_PERIOD_X_MS,
            zigzag_period_y_ms: ZIGZAG_PERIOD_Y_MS,
            orbit_offset_x: ORBIT_OFFSET_X,
            orbit_offset_y: ORBIT_OFFSET_Y,
            orbit_radius_min: ORBIT_RADIUS_MIN,
            orbit_radius_max: ORBIT_RADIUS_MAX,
            orbit_angular_step: ORBIT_ANGULAR_STEP,
            orbit_speed_factor: ORBIT_SPEED_FACTOR,
            jitter_chance: JITTER_CHANCE,
            jitter_amount: JITTER_AMOUNT,
            despawn_margin: DESPAWN_MARGIN,

            score_base: SCORE_BASE,
            score_min_base: SCORE_MIN_BASE,
            score_size_divisor: SCORE_SIZE_DIVISOR,
            score_speed_bonus: SCORE_SPEED_BONUS,
            miss_penalty: MISS_PENALTY,

            feedback_radius: FEEDBACK_RADIUS,
            feedback_duration_ms: FEEDBACK_DURATION_MS,
            feedback_growth_ms: FEEDBACK_GROWTH_MS,
            feedback_line_width: FEEDBACK_LINE_WIDTH,

            sprite_alpha: SPRITE_ALPHA,
        }
    }
}

impl Tuning {
    /// Tuning with the random per-tick nudge switched off
    pub fn without_jitter() -> Self {
        Self {
            jitter_chance: 0.0,
            ..Self::default()
        }
    }

    /// Check that every range can be sampled and every divisor is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("scale", self.scale_min, self.scale_max),
            ("speed", self.speed_min, self.speed_max),
            ("lifespan_ms", self.lifespan_min_ms, self.lifespan_max_ms),
            ("orbit_radius", self.orbit_radius_min, self.orbit_radius_max),
        ];
        for (name, min, max) in ranges {
            if !(min < max) {
                return Err(ConfigError::InvalidRange { name });
            }
        }
        if self.scale_min <= 0.0 {
            return Err(ConfigError::InvalidValue { name: "scale_min" });
        }

        let probabilities = [
            ("burst_chance", self.burst_chance),
            ("jitter_chance", self.jitter_chance),
            ("sprite_alpha", self.sprite_alpha),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::InvalidValue { name });
            }
        }

        let positive = [
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("zigzag_period_x_ms", self.zigzag_period_x_ms),
            ("zigzag_period_y_ms", self.zigzag_period_y_ms),
            ("feedback_duration_ms", self.feedback_duration_ms),
            ("feedback_growth_ms", self.feedback_growth_ms),
            ("size_factor", self.size_factor as f64),
            ("score_size_divisor", self.score_size_divisor as f64),
        ];
        for (name, v) in positive {
            if !(v > 0.0) {
                return Err(ConfigError::InvalidValue { name });
            }
        }

        let non_negative = [
            ("edge_inset", self.edge_inset),
            ("zigzag_velocity_range", self.zigzag_velocity_range),
            ("orbit_offset_x", self.orbit_offset_x),
            ("orbit_offset_y", self.orbit_offset_y),
            ("jitter_amount", self.jitter_amount),
            ("despawn_margin", self.despawn_margin),
        ];
        for (name, v) in non_negative {
            if !(v >= 0.0) {
                return Err(ConfigError::InvalidValue { name });
            }
        }

        Ok(())
    }
}
