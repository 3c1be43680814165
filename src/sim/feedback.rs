//! Click ripples
//!
//! Cosmetic only: a ring that grows and fades at the point of a scoring hit.

use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct ClickFeedback {
    pub pos: Vec2,
    pub born_ms: f64,
    /// Ring radius at age zero
    pub radius: f32,
}

impl ClickFeedback {
    pub fn new(pos: Vec2, born_ms: f64, radius: f32) -> Self {
        Self {
            pos,
            born_ms,
            radius,
        }
    }

    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.born_ms
    }

    pub fn is_expired(&self, now_ms: f64, duration_ms: f64) -> bool {
        self.age_ms(now_ms) > duration_ms
    }

    /// Radius grows by one pixel every `growth_ms`
    pub fn ring_radius(&self, now_ms: f64, growth_ms: f64) -> f32 {
        self.radius + (self.age_ms(now_ms).max(0.0) / growth_ms) as f32
    }

    /// Linear fade from 1 to 0 over `duration_ms`
    pub fn alpha(&self, now_ms: f64, duration_ms: f64) -> f32 {
        (1.0 - self.age_ms(now_ms) / duration_ms).clamp(0.0, 1.0) as f32
    }
}

/// Drop ripples older than `duration_ms`
pub fn prune(feedback: &mut Vec<ClickFeedback>, now_ms: f64, duration_ms: f64) -> usize {
    let before = feedback.len();
    feedback.retain(|f| !f.is_expired(now_ms, duration_ms));
    before - feedback.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_exactly_after_duration() {
        let mut feedback = vec![ClickFeedback::new(Vec2::new(10.0, 10.0), 1000.0, 6.0)];
        assert_eq!(prune(&mut feedback, 1600.0, 600.0), 0);
        assert_eq!(prune(&mut feedback, 1600.5, 600.0), 1);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_ring_grows_and_fades() {
        let f = ClickFeedback::new(Vec2::ZERO, 0.0, 6.0);
        assert_eq!(f.ring_radius(0.0, 40.0), 6.0);
        assert_eq!(f.ring_radius(400.0, 40.0), 16.0);
        assert_eq!(f.alpha(0.0, 600.0), 1.0);
        assert!((f.alpha(300.0, 600.0) - 0.5).abs() < 1e-6);
        assert_eq!(f.alpha(600.0, 600.0), 0.0);
    }

    #[test]
    fn test_alpha_never_negative() {
        let f = ClickFeedback::new(Vec2::ZERO, 0.0, 6.0);
        for age in [599.0, 600.0, 601.0, 10_000.0] {
            assert!(f.alpha(age, 600.0) >= 0.0);
        }
    }
}
