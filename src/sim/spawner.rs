//! Spawner
//!
//! A fixed-interval timer creates new entities; each wave is one entity,
//! occasionally two. All spawn-time randomness is drawn here.

use glam::Vec2;

use super::entity::{Entity, MotionKind};
use super::motion::spawn_motion;
use super::rng::RandomSource;
use super::state::GameState;
use crate::assets::SpriteCatalog;
use crate::tuning::Tuning;

/// Build a fresh entity at `now_ms`
pub fn create_entity<R: RandomSource>(
    id: u32,
    rng: &mut R,
    catalog: &SpriteCatalog,
    canvas: Vec2,
    now_ms: f64,
    tuning: &Tuning,
) -> Entity {
    let sprite = catalog.pick(rng);
    let scale = rng.uniform(tuning.scale_min, tuning.scale_max);
    let size = (catalog.natural_size(sprite) * scale * tuning.size_factor)
        .round()
        .max(Vec2::ONE);

    let inset = tuning.edge_inset;
    let x = inset_coord(rng, inset, canvas.x);
    let y = inset_coord(rng, inset, canvas.y);
    let pos = Vec2::new(x, y);

    let kind = *rng.choice(&MotionKind::ALL);
    let speed = rng.uniform(tuning.speed_min, tuning.speed_max);
    let motion = spawn_motion(kind, speed, pos, rng, tuning);
    let lifespan_ms = rng.uniform(tuning.lifespan_min_ms, tuning.lifespan_max_ms) as f64;

    Entity {
        id,
        sprite,
        size,
        pos,
        motion,
        speed,
        born_ms: now_ms,
        lifespan_ms,
    }
}

/// Uniform in [inset, extent - inset), collapsing to `inset` on tiny surfaces
fn inset_coord<R: RandomSource>(rng: &mut R, inset: f32, extent: f32) -> f32 {
    let max = extent - inset;
    if max > inset {
        rng.uniform(inset, max)
    } else {
        inset
    }
}

/// Spawn one entity into the live set and return its ID
pub fn spawn(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let entity = create_entity(
        id,
        &mut state.rng,
        &state.catalog,
        state.canvas,
        state.clock_ms,
        &state.tuning,
    );
    log::debug!(
        "spawned entity {} ({}) at ({:.0}, {:.0}) size {}x{} speed {:.2}",
        id,
        entity.motion.kind().as_str(),
        entity.pos.x,
        entity.pos.y,
        entity.size.x,
        entity.size.y,
        entity.speed
    );
    state.entities.push(entity);
    id
}

/// Opening wave, spawned before the first tick
pub fn spawn_initial(state: &mut GameState) {
    for _ in 0..state.tuning.initial_spawn_count {
        spawn(state);
    }
}

/// Advance the spawn timer; spawn a wave once the interval has passed.
/// Returns the number of entities created.
///
/// The timer starts with the session, so the first timed wave follows the
/// opening wave by one full interval.
pub fn update(state: &mut GameState, elapsed_ms: f64) -> u32 {
    state.spawn_timer_ms += elapsed_ms;
    if state.spawn_timer_ms <= state.tuning.spawn_interval_ms {
        return 0;
    }
    state.spawn_timer_ms = 0.0;

    let count = if state.rng.chance(state.tuning.burst_chance) {
        2
    } else {
        1
    };
    for _ in 0..count {
        spawn(state);
    }
    count
}
