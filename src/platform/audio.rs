//! Background music
//!
//! A single looped track behind a play/pause toggle. Browsers may refuse to
//! start playback (autoplay policy); those refusals are ignored and have no
//! effect on the game.

use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

/// Looped background track
pub struct MusicPlayer {
    element: Option<HtmlAudioElement>,
}

impl MusicPlayer {
    pub fn new(path: &str, volume: f32) -> Self {
        let element = HtmlAudioElement::new_with_src(path).ok();
        match &element {
            Some(el) => {
                el.set_loop(true);
                el.set_volume(volume.clamp(0.0, 1.0) as f64);
            }
            None => log::warn!("Failed to create audio element - music disabled"),
        }
        Self { element }
    }

    /// Start if paused, pause if playing. Returns whether playback was requested.
    pub fn toggle(&self) -> bool {
        let Some(el) = &self.element else {
            return false;
        };

        if el.paused() {
            if let Ok(promise) = el.play() {
                spawn_local(async move {
                    let _ = JsFuture::from(promise).await;
                });
            }
            true
        } else {
            let _ = el.pause();
            false
        }
    }
}
