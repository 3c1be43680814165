//! Per-frame simulation tick
//!
//! Core game loop step: spawn, move and prune, then describe the frame as a
//! list of render commands for whatever surface the platform draws on.

use glam::Vec2;

use super::state::GameState;
use super::{feedback, motion, spawner};
use crate::assets::SpriteId;

/// One drawing request, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Background image stretched over the whole surface
    Background { size: Vec2 },
    /// Sprite image at a rect (top-left `pos`)
    Sprite {
        sprite: SpriteId,
        pos: Vec2,
        size: Vec2,
        alpha: f32,
    },
    /// White stroked circle
    Ring {
        center: Vec2,
        radius: f32,
        alpha: f32,
        line_width: f32,
    },
}

/// Advance the game state by one display frame that took `elapsed_ms`
pub fn tick(state: &mut GameState, elapsed_ms: f64) -> Vec<RenderCommand> {
    let elapsed_ms = elapsed_ms.max(0.0);
    state.clock_ms += elapsed_ms;
    state.time_ticks += 1;

    spawner::update(state, elapsed_ms);

    motion::update(
        &mut state.entities,
        &mut state.rng,
        state.clock_ms,
        state.canvas,
        &state.tuning,
    );

    let mut commands = Vec::with_capacity(1 + state.entities.len() + state.feedback.len());
    commands.push(RenderCommand::Background { size: state.canvas });
    commands.extend(state.entities.iter().map(|e| RenderCommand::Sprite {
        sprite: e.sprite,
        pos: e.pos,
        size: e.size,
        alpha: state.tuning.sprite_alpha,
    }));

    let tuning = &state.tuning;
    feedback::prune(&mut state.feedback, state.clock_ms, tuning.feedback_duration_ms);
    commands.extend(state.feedback.iter().map(|f| RenderCommand::Ring {
        center: f.pos,
        radius: f.ring_radius(state.clock_ms, tuning.feedback_growth_ms),
        alpha: f.alpha(state.clock_ms, tuning.feedback_duration_ms),
        line_width: tuning.feedback_line_width,
    }));

    commands
}
