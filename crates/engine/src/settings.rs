//! Sound settings owned by a session
//!
//! Playback itself lives in the UI layer; the session only keeps the mute flag
//! and master volume so the UI can ask what volume a sound should play at.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    muted: bool,
    volume: f32,
}

impl SoundSettings {
    /// Muted, at full volume
    pub fn new() -> Self {
        Self {
            muted: true,
            volume: 1.0,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Flip the mute flag and return the new value
    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set master volume, clamped to 0..=1
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Volume to play a sound requested at `requested`, or `None` while muted
    pub fn effective_volume(&self, requested: f32) -> Option<f32> {
        if self.muted {
            return None;
        }
        Some(requested.clamp(0.0, 1.0) * self.volume)
    }
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self::new()
    }
}
