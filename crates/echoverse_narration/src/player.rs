//! Playback state for the narration player.
//!
//! Audio output itself belongs to the front end; this module tracks the
//! controls (play/pause, position, volume, speed) and formats times for display.

use echoverse_core::AudioHandle;
use echoverse_error::{NarrationError, NarrationResult};
use tracing::debug;

/// Playback rates offered by the speed menu.
pub const PLAYBACK_RATES: [f32; 4] = [0.75, 1.0, 1.5, 2.0];

/// Format a position in seconds as `m:ss`.
///
/// Zero, negative and NaN inputs format as `0:00`.
///
/// ```
/// use echoverse_narration::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// assert_eq!(format_time(65.0), "1:05");
/// assert_eq!(format_time(600.9), "10:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    if seconds.is_nan() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Volume icon bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum VolumeLevel {
    /// Volume is zero
    #[display("muted")]
    Muted,
    /// Volume below one half
    #[display("low")]
    Low,
    /// Volume at one half or above
    #[display("high")]
    High,
}

/// Player controls for the audio on display.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    source: Option<AudioHandle>,
    playing: bool,
    current_time: f64,
    duration: f64,
    volume: f32,
    rate: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            source: None,
            playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            rate: 1.0,
        }
    }
}

impl PlayerState {
    /// A stopped player with full volume and normal speed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Audio currently loaded.
    pub fn source(&self) -> Option<&AudioHandle> {
        self.source.as_ref()
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Position in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Length of the loaded audio in seconds, 0 until known.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Volume in `0.0..=1.0`.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Playback rate, one of [`PLAYBACK_RATES`].
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Load `source`, resetting play state, position and rate when it differs
    /// from what is loaded. Volume carries over.
    ///
    /// Returns `true` when the source changed.
    pub fn load_source(&mut self, source: Option<&AudioHandle>) -> bool {
        if self.source.as_ref() == source {
            return false;
        }
        debug!(source = ?source.map(|handle| handle.to_string()), "Player source changed");
        self.source = source.cloned();
        self.playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.rate = 1.0;
        true
    }

    /// Record the length of the loaded audio once it is known.
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self.current_time = self.current_time.min(self.duration);
    }

    /// Flip between playing and paused. Does nothing without a source.
    ///
    /// Returns the new playing flag.
    pub fn toggle_play(&mut self) -> bool {
        if self.source.is_some() {
            self.playing = !self.playing;
        }
        self.playing
    }

    /// Move to `seconds`, clamped to `[0, duration]`.
    pub fn seek(&mut self, seconds: f64) {
        self.current_time = if seconds.is_nan() {
            0.0
        } else {
            seconds.clamp(0.0, self.duration)
        };
    }

    /// Advance the position by `elapsed` seconds of wall time while playing.
    ///
    /// Reaching the end stops playback.
    pub fn advance(&mut self, elapsed: f64) {
        if !self.playing {
            return;
        }
        self.seek(self.current_time + elapsed * f64::from(self.rate));
        if self.duration > 0.0 && self.current_time >= self.duration {
            self.finished();
        }
    }

    /// Playback reached the end.
    pub fn finished(&mut self) {
        self.playing = false;
    }

    /// Set the volume, clamped to `0.0..=1.0`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
    }

    /// Set the playback rate.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a rate outside [`PLAYBACK_RATES`].
    pub fn set_rate(&mut self, rate: f32) -> NarrationResult<()> {
        if !PLAYBACK_RATES.contains(&rate) {
            return Err(NarrationError::validation(format!(
                "Unsupported playback rate {}x; choose 0.75x, 1x, 1.5x or 2x",
                rate
            )));
        }
        self.rate = rate;
        Ok(())
    }

    /// Volume icon bucket for the current volume.
    pub fn volume_level(&self) -> VolumeLevel {
        if self.volume == 0.0 {
            VolumeLevel::Muted
        } else if self.volume < 0.5 {
            VolumeLevel::Low
        } else {
            VolumeLevel::High
        }
    }
}
