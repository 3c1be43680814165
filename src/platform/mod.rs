//! Platform abstraction layer
//!
//! Browser-only pieces the simulation never sees:
//! - Image loading (gates game start)
//! - Canvas 2D painting of render commands
//! - Looped background music

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod loader;
#[cfg(target_arch = "wasm32")]
pub mod painter;

#[cfg(target_arch = "wasm32")]
pub use audio::MusicPlayer;
#[cfg(target_arch = "wasm32")]
pub use loader::{LoadedAssets, load_assets};
#[cfg(target_arch = "wasm32")]
pub use painter::CanvasPainter;
