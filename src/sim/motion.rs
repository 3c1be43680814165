//! Motion engine
//!
//! Advances every live entity along its pattern once per tick, applies the
//! occasional random nudge, then removes entities that outlived their
//! lifespan or drifted too far off-canvas.
//!
//! Steps are per tick, not per millisecond: velocities are scaled by a fixed
//! factor and the driver is expected to run at display refresh rate.

use glam::Vec2;

use super::entity::{Entity, Motion, MotionKind};
use super::rng::RandomSource;
use crate::tuning::Tuning;
use crate::{normalize_angle, polar_to_cartesian};

/// Velocity split for the two diagonal kinds (fractions of speed)
const DIAG_VELOCITY: Vec2 = Vec2::new(0.8, 0.6);
const DIAG2_VELOCITY: Vec2 = Vec2::new(-0.9, 0.5);

/// Draw spawn-time parameters for `kind`. `origin` is the spawn position.
pub fn spawn_motion<R: RandomSource>(
    kind: MotionKind,
    speed: f32,
    origin: Vec2,
    rng: &mut R,
    tuning: &Tuning,
) -> Motion {
    match kind {
        MotionKind::Up => Motion::Up { vy: -speed },
        MotionKind::Down => Motion::Down { vy: speed },
        MotionKind::Left => Motion::Left { vx: -speed },
        MotionKind::Right => Motion::Right { vx: speed },
        MotionKind::Diag => Motion::Diag {
            vel: DIAG_VELOCITY * speed,
        },
        MotionKind::Diag2 => Motion::Diag2 {
            vel: DIAG2_VELOCITY * speed,
        },
        MotionKind::Zigzag => {
            let range = tuning.zigzag_velocity_range;
            let vx = rng.uniform(-range, range);
            let vy = rng.uniform(-range, range);
            Motion::Zigzag {
                vel: Vec2::new(vx, vy),
            }
        }
        MotionKind::Circular => {
            let dx = rng.uniform(-tuning.orbit_offset_x, tuning.orbit_offset_x);
            let dy = rng.uniform(-tuning.orbit_offset_y, tuning.orbit_offset_y);
            let angle = rng.uniform(0.0, std::f32::consts::TAU);
            let radius = rng.uniform(tuning.orbit_radius_min, tuning.orbit_radius_max);
            Motion::Circular {
                center: origin + Vec2::new(dx, dy),
                angle,
                radius,
            }
        }
    }
}

/// Move one entity by one tick. `index` is its slot in the live list and
/// skews the zigzag phase so neighbours do not steer in lockstep.
pub fn advance(entity: &mut Entity, index: usize, now_ms: f64, tuning: &Tuning) {
    let speed = entity.speed;
    let linear_step = speed * tuning.linear_factor;

    match &mut entity.motion {
        Motion::Up { vy } | Motion::Down { vy } => {
            entity.pos.y += *vy * linear_step;
        }
        Motion::Left { vx } | Motion::Right { vx } => {
            entity.pos.x += *vx * linear_step;
        }
        Motion::Diag { vel } | Motion::Diag2 { vel } => {
            entity.pos += *vel * linear_step;
        }
        Motion::Zigzag { vel } => {
            let t = now_ms + index as f64 * tuning.zigzag_index_skew_ms;
            vel.x += (t / tuning.zigzag_period_x_ms).sin() as f32 * tuning.zigzag_steer;
            vel.y += (t / tuning.zigzag_period_y_ms).cos() as f32 * tuning.zigzag_steer;
            entity.pos += *vel * (speed * tuning.zigzag_factor);
        }
        Motion::Circular {
            center,
            angle,
            radius,
        } => {
            *angle = normalize_angle(
                *angle + tuning.orbit_angular_step * (speed * tuning.orbit_speed_factor),
            );
            entity.pos = *center + polar_to_cartesian(*radius, *angle);
        }
    }
}

/// Nudge an entity by an independent offset on each axis
pub fn jitter<R: RandomSource>(entity: &mut Entity, rng: &mut R, tuning: &Tuning) {
    let a = tuning.jitter_amount;
    entity.pos.x += rng.uniform(-a, a);
    entity.pos.y += rng.uniform(-a, a);
}

/// Whether an entity should leave the live set
pub fn should_expire(entity: &Entity, now_ms: f64, canvas: Vec2, tuning: &Tuning) -> bool {
    entity.is_expired(now_ms) || entity.is_out_of_bounds(canvas, tuning.despawn_margin)
}

/// Remove expired entities, keeping creation order. Returns how many went.
pub fn prune(entities: &mut Vec<Entity>, now_ms: f64, canvas: Vec2, tuning: &Tuning) -> usize {
    let before = entities.len();
    entities.retain(|e| {
        let expired = should_expire(e, now_ms, canvas, tuning);
        if expired {
            log::debug!(
                "entity {} ({}) expired at {:.0}ms",
                e.id,
                e.motion.kind().as_str(),
                now_ms
            );
        }
        !expired
    });
    before - entities.len()
}

/// Advance, jitter and prune all entities for one tick
pub fn update<R: RandomSource>(
    entities: &mut Vec<Entity>,
    rng: &mut R,
    now_ms: f64,
    canvas: Vec2,
    tuning: &Tuning,
) -> usize {
    for (index, entity) in entities.iter_mut().enumerate() {
        advance(entity, index, now_ms, tuning);
        if rng.chance(tuning.jitter_chance) {
            jitter(entity, rng, tuning);
        }
    }
    prune(entities, now_ms, canvas, tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::SpriteId;
    use crate::sim::rng::{ScriptedRng, SimRng};
    use proptest::prelude::*;

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    fn entity(motion: Motion, speed: f32, pos: Vec2) -> Entity {
        Entity {
            id: 1,
            sprite: SpriteId(0),
            size: Vec2::new(50.0, 50.0),
            pos,
            motion,
            speed,
            born_ms: 0.0,
            lifespan_ms: 10_000.0,
        }
    }

    #[test]
    fn test_right_one_tick() {
        let tuning = Tuning::without_jitter();
        let mut rng = SimRng::new(1);
        let motion = spawn_motion(MotionKind::Right, 1.0, Vec2::new(100.0, 100.0), &mut rng, &tuning);
        let mut entities = vec![entity(motion, 1.0, Vec2::new(100.0, 100.0))];

        update(&mut entities, &mut rng, 16.0, CANVAS, &tuning);

        assert!((entities[0].pos.x - 101.8).abs() < 1e-4);
        assert_eq!(entities[0].pos.y, 100.0);
    }

    #[test]
    fn test_linear_step_scales_with_speed_twice() {
        let tuning = Tuning::without_jitter();
        let mut e = entity(Motion::Right { vx: 0.5 }, 0.5, Vec2::new(100.0, 100.0));
        advance(&mut e, 0, 0.0, &tuning);
        assert!((e.pos.x - 100.45).abs() < 1e-4);
    }

    #[test]
    fn test_linear_kinds_move_in_expected_direction() {
        let tuning = Tuning::without_jitter();
        let mut rng = SimRng::new(5);
        let start = Vec2::new(400.0, 300.0);
        let expected = [
            (MotionKind::Up, Vec2::new(0.0, -1.0)),
            (MotionKind::Down, Vec2::new(0.0, 1.0)),
            (MotionKind::Left, Vec2::new(-1.0, 0.0)),
            (MotionKind::Right, Vec2::new(1.0, 0.0)),
            (MotionKind::Diag, Vec2::new(1.0, 1.0)),
            (MotionKind::Diag2, Vec2::new(-1.0, 1.0)),
        ];
        for (kind, dir) in expected {
            let motion = spawn_motion(kind, 1.2, start, &mut rng, &tuning);
            let mut e = entity(motion, 1.2, start);
            advance(&mut e, 0, 0.0, &tuning);
            let delta = e.pos - start;
            assert_eq!(delta.x.signum() * dir.x.abs(), dir.x, "{kind:?} x");
            assert_eq!(delta.y.signum() * dir.y.abs(), dir.y, "{kind:?} y");
        }
    }

    #[test]
    fn test_diag_step_values() {
        let tuning = Tuning::without_jitter();
        let mut rng = SimRng::new(0);
        let motion = spawn_motion(MotionKind::Diag2, 1.0, Vec2::ZERO, &mut rng, &tuning);
        assert_eq!(
            motion,
            Motion::Diag2 {
                vel: Vec2::new(-0.9, 0.5)
            }
        );
        let mut e = entity(motion, 1.0, Vec2::new(100.0, 100.0));
        advance(&mut e, 0, 0.0, &tuning);
        assert!((e.pos.x - (100.0 - 0.9 * 1.8)).abs() < 1e-4);
        assert!((e.pos.y - (100.0 + 0.5 * 1.8)).abs() < 1e-4);
    }

    #[test]
    fn test_circular_spawn_params_from_rng() {
        let tuning = Tuning::default();
        // offset x, offset y, angle, radius
        let mut rng = ScriptedRng::new(&[0.5, 0.0, 0.25, 0.5]);
        let motion = spawn_motion(MotionKind::Circular, 1.0, Vec2::new(300.0, 200.0), &mut rng, &tuning);
        match motion {
            Motion::Circular {
                center,
                angle,
                radius,
            } => {
                assert_eq!(center, Vec2::new(300.0, 160.0));
                assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
                assert_eq!(radius, 70.0);
            }
            other => panic!("expected circular, got {other:?}"),
        }
    }

    #[test]
    fn test_zigzag_steer_uses_index_skew() {
        let tuning = Tuning::without_jitter();
        let motion = Motion::Zigzag { vel: Vec2::ZERO };
        let mut first = entity(motion, 1.0, Vec2::new(100.0, 100.0));
        let mut second = first.clone();

        advance(&mut first, 0, 0.0, &tuning);
        advance(&mut second, 3, 0.0, &tuning);

        // index 0 at t=0: sin(0) = 0, cos(0) = 1
        match first.motion {
            Motion::Zigzag { vel } => {
                assert!(vel.x.abs() < 1e-6);
                assert!((vel.y - 0.02).abs() < 1e-6);
            }
            _ => unreachable!(),
        }
        assert!((first.pos.y - (100.0 + 0.02 * 1.2)).abs() < 1e-4);

        // index 3 is skewed by 300ms
        match second.motion {
            Motion::Zigzag { vel } => {
                let expected_x = (300.0f64 / 400.0).sin() as f32 * 0.02;
                assert!((vel.x - expected_x).abs() < 1e-6);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_zigzag_step_scales_with_speed() {
        let tuning = Tuning::without_jitter();
        let motion = Motion::Zigzag {
            vel: Vec2::new(0.1, 0.0),
        };
        let mut e = entity(motion, 0.5, Vec2::new(100.0, 100.0));
        advance(&mut e, 0, 0.0, &tuning);

        // vel after steer is (0.1, 0.02), scaled by 0.5 * 1.2
        assert!((e.pos.x - (100.0 + 0.1 * 0.6)).abs() < 1e-5);
        assert!((e.pos.y - (100.0 + 0.02 * 0.6)).abs() < 1e-5);
    }

    #[test]
    fn test_circular_angle_step() {
        let tuning = Tuning::without_jitter();
        let center = Vec2::new(300.0, 200.0);
        let motion = Motion::Circular {
            center,
            angle: 0.0,
            radius: 50.0,
        };
        let mut e = entity(motion, 1.0, center);
        advance(&mut e, 0, 0.0, &tuning);

        let Motion::Circular { angle, .. } = e.motion else {
            unreachable!()
        };
        assert!((angle - 0.024).abs() < 1e-6);
        let expected = center + Vec2::new(50.0 * 0.024f32.cos(), 50.0 * 0.024f32.sin());
        assert!(e.pos.distance(expected) < 1e-4);

        // Half speed turns half as far
        let mut slow = entity(motion, 0.5, center);
        advance(&mut slow, 0, 0.0, &tuning);
        let Motion::Circular { angle, .. } = slow.motion else {
            unreachable!()
        };
        assert!((angle - 0.012).abs() < 1e-6);
    }

    #[test]
    fn test_jitter_bounded() {
        let tuning = Tuning {
            jitter_chance: 1.0,
            ..Tuning::default()
        };
        let mut rng = SimRng::new(77);
        let start = Vec2::new(400.0, 300.0);
        for _ in 0..100 {
            let mut entities = vec![entity(Motion::Up { vy: 0.0 }, 1.0, start)];
            update(&mut entities, &mut rng, 0.0, CANVAS, &tuning);
            let offset = entities[0].pos - start;
            assert!(offset.x.abs() <= 0.8 + 1e-3);
            assert!(offset.y.abs() <= 0.8 + 1e-3);
        }
    }

    #[test]
    fn test_lifespan_expiry_regardless_of_position() {
        let tuning = Tuning::without_jitter();
        let mut entities = vec![entity(Motion::Up { vy: 0.0 }, 1.0, Vec2::new(400.0, 300.0))];
        assert_eq!(prune(&mut entities, 10_000.0, CANVAS, &tuning), 0);
        assert_eq!(prune(&mut entities, 10_000.1, CANVAS, &tuning), 1);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_out_of_bounds_expiry() {
        let tuning = Tuning::without_jitter();
        let mut rng = SimRng::new(3);
        let mut entities = vec![entity(Motion::Left { vx: -1.0 }, 1.0, Vec2::new(-199.0, 300.0))];
        let removed = update(&mut entities, &mut rng, 16.0, CANVAS, &tuning);
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_prune_is_idempotent() {
        let tuning = Tuning::without_jitter();
        let mut entities = vec![
            entity(Motion::Up { vy: 0.0 }, 1.0, Vec2::new(400.0, 300.0)),
            entity(Motion::Up { vy: 0.0 }, 1.0, Vec2::new(1500.0, 300.0)),
            Entity {
                lifespan_ms: 100.0,
                ..entity(Motion::Up { vy: 0.0 }, 1.0, Vec2::new(10.0, 10.0))
            },
        ];
        assert_eq!(prune(&mut entities, 500.0, CANVAS, &tuning), 2);
        assert_eq!(prune(&mut entities, 500.0, CANVAS, &tuning), 0);
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn test_prune_keeps_creation_order() {
        let tuning = Tuning::without_jitter();
        let mut entities: Vec<Entity> = (1..=4)
            .map(|id| Entity {
                id,
                ..entity(Motion::Up { vy: 0.0 }, 1.0, Vec2::new(100.0 * id as f32, 100.0))
            })
            .collect();
        entities[1].pos.x = -500.0;
        prune(&mut entities, 0.0, CANVAS, &tuning);
        let ids: Vec<u32> = entities.iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 3, 4]);
    }

    proptest! {
        #[test]
        fn prop_circular_stays_on_orbit(
            seed in any::<u64>(),
            speed in 0.25f32..1.6,
            ticks in 1usize..600,
        ) {
            let tuning = Tuning::without_jitter();
            let mut rng = SimRng::new(seed);
            let origin = Vec2::new(400.0, 300.0);
            let motion = spawn_motion(MotionKind::Circular, speed, origin, &mut rng, &tuning);
            let Motion::Circular { center, radius, .. } = motion else {
                unreachable!()
            };
            let mut entities = vec![entity(motion, speed, origin)];
            entities[0].lifespan_ms = f64::MAX;
            for t in 0..ticks {
                update(&mut entities, &mut rng, t as f64 * 16.0, CANVAS, &tuning);
                prop_assert_eq!(entities.len(), 1);
                let dist = entities[0].pos.distance(center);
                prop_assert!((dist - radius).abs() < 1e-3 * radius.max(1.0));
            }
        }

        #[test]
        fn prop_size_never_changes(seed in any::<u64>(), kind_idx in 0usize..8, ticks in 1usize..300) {
            let tuning = Tuning::default();
            let mut rng = SimRng::new(seed);
            let kind = MotionKind::ALL[kind_idx];
            let origin = Vec2::new(400.0, 300.0);
            let motion = spawn_motion(kind, 1.0, origin, &mut rng, &tuning);
            let mut entities = vec![entity(motion, 1.0, origin)];
            entities[0].lifespan_ms = f64::MAX;
            for t in 0..ticks {
                update(&mut entities, &mut rng, t as f64 * 16.0, CANVAS, &tuning);
                if let Some(e) = entities.first() {
                    prop_assert_eq!(e.size, Vec2::new(50.0, 50.0));
                }
            }
        }

        #[test]
        fn prop_removed_once_lifespan_passed(
            seed in any::<u64>(),
            lifespan in 7000.0f64..20000.0,
            extra in 0.001f64..5000.0,
        ) {
            let tuning = Tuning::default();
            let mut rng = SimRng::new(seed);
            let mut e = entity(Motion::Up { vy: 0.0 }, 1.0, Vec2::new(400.0, 300.0));
            e.lifespan_ms = lifespan;
            let mut entities = vec![e];
            update(&mut entities, &mut rng, lifespan + extra, CANVAS, &tuning);
            prop_assert!(entities.is_empty());
        }
    }
}
