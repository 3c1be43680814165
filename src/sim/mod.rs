//! Seedable simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform dependencies:
//! - Seeded RNG only
//! - Time enters only through `tick(elapsed_ms)`
//! - Stable iteration order (creation order)

pub mod entity;
pub mod feedback;
pub mod hit;
pub mod motion;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use entity::{Entity, Motion, MotionKind};
pub use feedback::ClickFeedback;
pub use hit::{ClickOutcome, click, click_at, score_delta};
pub use rng::{RandomSource, SimRng};
pub use state::GameState;
pub use tick::{RenderCommand, tick};
