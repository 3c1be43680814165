//! Spawnable sprite entities
//!
//! An entity is a sprite with a fixed size, a motion pattern and a lifespan.
//! The motion pattern is a closed sum type: each kind carries only the
//! parameters its update rule reads.

use glam::Vec2;

use crate::assets::SpriteId;

/// The eight motion patterns, without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionKind {
    Up,
    Down,
    Left,
    Right,
    Diag,
    Diag2,
    Circular,
    Zigzag,
}

impl MotionKind {
    /// Every kind, in draw order for uniform selection
    pub const ALL: [MotionKind; 8] = [
        MotionKind::Up,
        MotionKind::Down,
        MotionKind::Left,
        MotionKind::Right,
        MotionKind::Diag,
        MotionKind::Diag2,
        MotionKind::Circular,
        MotionKind::Zigzag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionKind::Up => "up",
            MotionKind::Down => "down",
            MotionKind::Left => "left",
            MotionKind::Right => "right",
            MotionKind::Diag => "diag",
            MotionKind::Diag2 => "diag2",
            MotionKind::Circular => "circular",
            MotionKind::Zigzag => "zigzag",
        }
    }
}

/// Motion pattern with its per-kind parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Up { vy: f32 },
    Down { vy: f32 },
    Left { vx: f32 },
    Right { vx: f32 },
    Diag { vel: Vec2 },
    Diag2 { vel: Vec2 },
    /// Velocity drifts every tick under a time-varying steer
    Zigzag { vel: Vec2 },
    /// Position is recomputed on the orbit each tick
    Circular { center: Vec2, angle: f32, radius: f32 },
}

impl Motion {
    pub fn kind(&self) -> MotionKind {
        match self {
            Motion::Up { .. } => MotionKind::Up,
            Motion::Down { .. } => MotionKind::Down,
            Motion::Left { .. } => MotionKind::Left,
            Motion::Right { .. } => MotionKind::Right,
            Motion::Diag { .. } => MotionKind::Diag,
            Motion::Diag2 { .. } => MotionKind::Diag2,
            Motion::Circular { .. } => MotionKind::Circular,
            Motion::Zigzag { .. } => MotionKind::Zigzag,
        }
    }
}

/// A live sprite
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: u32,
    pub sprite: SpriteId,
    /// Pixel width/height, fixed at spawn
    pub size: Vec2,
    /// Top-left corner
    pub pos: Vec2,
    pub motion: Motion,
    pub speed: f32,
    pub born_ms: f64,
    pub lifespan_ms: f64,
}

impl Entity {
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.born_ms
    }

    /// Strictly older than its lifespan
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.age_ms(now_ms) > self.lifespan_ms
    }

    /// More than `margin` pixels beyond any edge of a `canvas`-sized surface
    pub fn is_out_of_bounds(&self, canvas: Vec2, margin: f32) -> bool {
        self.pos.x < -margin
            || self.pos.x > canvas.x + margin
            || self.pos.y < -margin
            || self.pos.y > canvas.y + margin
    }

    /// Closed axis-aligned box test
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y <= self.pos.y + self.size.y
    }
}
