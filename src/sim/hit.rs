//! Hit-testing and scoring
//!
//! A click removes at most one entity: the most recently spawned one whose
//! box contains the point, which is also the one drawn on top. Small, fast
//! sprites are worth more than large, slow ones. Clicking empty space costs
//! a small penalty, never taking the score below zero.

use glam::Vec2;

use super::entity::Entity;
use super::feedback::ClickFeedback;
use super::state::GameState;
use crate::tuning::Tuning;

/// Result of resolving one click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Entity `id` was removed and `delta` points awarded
    Hit { id: u32, delta: u64 },
    /// Nothing under the pointer; `penalty` points were actually deducted
    Miss { penalty: u64 },
}

/// Points for catching an entity of `size` moving at `speed`
pub fn score_delta(size: Vec2, speed: f32, tuning: &Tuning) -> u64 {
    let base = (tuning.score_base - (size.x + size.y) / tuning.score_size_divisor)
        .max(tuning.score_min_base);
    let bonus = speed * tuning.score_speed_bonus;
    (base + bonus).round().max(0.0) as u64
}

/// Index of the topmost entity containing `point`
pub fn topmost_at(entities: &[Entity], point: Vec2) -> Option<usize> {
    entities.iter().rposition(|e| e.contains(point))
}

/// Resolve a click at `point` against the live set at the current clock
pub fn click(state: &mut GameState, point: Vec2) -> ClickOutcome {
    click_at(state, point, 0.0)
}

/// Resolve a click that landed `since_tick_ms` after the last tick.
///
/// Hit-testing uses positions from the last tick; the ripple is stamped with
/// the click's own time so its age counts from the click, not the frame.
pub fn click_at(state: &mut GameState, point: Vec2, since_tick_ms: f64) -> ClickOutcome {
    let Some(index) = topmost_at(&state.entities, point) else {
        let penalty = state.score.min(state.tuning.miss_penalty);
        state.score -= penalty;
        log::debug!(
            "miss at ({:.0}, {:.0}), -{} -> {}",
            point.x,
            point.y,
            penalty,
            state.score
        );
        return ClickOutcome::Miss { penalty };
    };

    let entity = state.entities.remove(index);
    let delta = score_delta(entity.size, entity.speed, &state.tuning);
    state.score += delta;
    state.feedback.push(ClickFeedback::new(
        point,
        state.clock_ms + since_tick_ms.max(0.0),
        state.tuning.feedback_radius,
    ));
    log::debug!(
        "hit entity {} ({}), +{} -> {}",
        entity.id,
        entity.motion.kind().as_str(),
        delta,
        state.score
    );

    ClickOutcome::Hit {
        id: entity.id,
        delta,
    }
}
