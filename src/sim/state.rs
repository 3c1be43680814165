//! Game state and core simulation types
//!
//! Everything the loop and the click handler touch lives in one owned
//! [`GameState`]. The platform layer holds it; nothing is global.

use glam::Vec2;

use super::entity::Entity;
use super::feedback::ClickFeedback;
use super::rng::SimRng;
use super::spawner;
use crate::assets::SpriteCatalog;
use crate::tuning::Tuning;

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG, seeded from `seed`
    pub rng: SimRng,
    pub tuning: Tuning,
    pub catalog: SpriteCatalog,
    /// Drawable surface size in pixels
    pub canvas: Vec2,
    /// Session clock (ms since the session started)
    pub clock_ms: f64,
    /// Time accumulated since the last spawn wave
    pub spawn_timer_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Score, never negative
    pub score: u64,
    /// Live entities in creation order (last is drawn on top)
    pub entities: Vec<Entity>,
    /// Live click ripples
    pub feedback: Vec<ClickFeedback>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a session and pre-spawn the opening entities
    pub fn new(seed: u64, catalog: SpriteCatalog, tuning: Tuning, canvas: Vec2) -> Self {
        let mut state = Self {
            seed,
            rng: SimRng::new(seed),
            tuning,
            catalog,
            canvas,
            clock_ms: 0.0,
            spawn_timer_ms: 0.0,
            time_ticks: 0,
            score: 0,
            entities: Vec::new(),
            feedback: Vec::new(),
            next_id: 1,
        };

        spawner::spawn_initial(&mut state);
        log::info!(
            "session started: seed={} canvas={}x{} entities={}",
            seed,
            canvas.x,
            canvas.y,
            state.entities.len()
        );

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Track a resized drawing surface. Live entities keep their positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas = Vec2::new(width, height);
    }
}
