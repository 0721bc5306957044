//! Playback session state for mediactl
//!
//! One [`PlaybackSession`] exists per mounted controller. It is the single
//! writer of its own fields: only the controller's action handlers and
//! engine-event handlers mutate it, so every mutator is crate-private while
//! the read side is public for hosts building their own views.

use crate::player::{PlaybackState, PlayerOptions};

/// Full playback state for one controller instance
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    /// Current playback state
    state: PlaybackState,

    /// Playback cursor in seconds
    position: f64,

    /// Total media length in seconds, unknown until metadata loads
    duration: Option<f64>,

    /// User-facing volume (0-100)
    volume: u8,

    /// Muted flag; muted forces engine gain to 0 regardless of `volume`
    muted: bool,

    /// Last nonzero volume, the restore target for unmuting at volume 0
    last_audible: u8,

    /// Whether the overlay is held visible by recent activity
    controls_visible: bool,
}

impl PlaybackSession {
    pub(crate) fn new(options: &PlayerOptions) -> Self {
        let volume = if options.muted { 0 } else { 100 };
        // `last_audible` must stay nonzero so unmuting never lands back on a
        // silent volume.
        let last_audible = if options.muted {
            match options.restore_volume.min(100) {
                0 => 50,
                v => v,
            }
        } else {
            volume
        };

        Self {
            state: PlaybackState::Paused,
            position: 0.0,
            duration: None,
            volume,
            muted: options.muted,
            last_audible,
            controls_visible: false,
        }
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether media is actively advancing
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Playback cursor in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Media length in seconds, `None` until the engine reports metadata
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// User-facing volume (0-100); unchanged by muting
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Whether audio output is muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether recent activity is holding the overlay visible
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Effective engine output gain in `[0.0, 1.0]`
    pub fn gain(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            f64::from(self.volume) / 100.0
        }
    }

    pub(crate) fn mark_playing(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub(crate) fn mark_paused(&mut self) {
        self.state = PlaybackState::Paused;
    }

    pub(crate) fn mark_ended(&mut self) {
        self.state = PlaybackState::Ended;
    }

    pub(crate) fn rewind(&mut self) {
        self.position = 0.0;
    }

    /// Move the cursor toward `target`, clamped into the playable range
    ///
    /// Out-of-range targets are a documented no-raise case: they snap to the
    /// nearest bound. Returns the position actually adopted.
    pub(crate) fn seek(&mut self, target: f64) -> f64 {
        self.position = self.clamp_position(target);
        self.position
    }

    /// Adopt an engine-reported cursor position
    pub(crate) fn update_position(&mut self, position: f64) {
        self.position = self.clamp_position(position);
    }

    /// Adopt the engine-reported duration
    ///
    /// Metadata arrives once per source; the engine re-emits it when its
    /// source changes, and the session re-clamps the cursor into the new
    /// range.
    pub(crate) fn set_duration(&mut self, duration: f64) {
        let duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        self.duration = Some(duration);
        self.position = self.clamp_position(self.position);
    }

    /// Set the user-facing volume, clamped to 0-100
    ///
    /// Volume 0 implies mute; any audible volume clears mute and becomes the
    /// new restore target. Returns the effective engine gain.
    pub(crate) fn set_volume(&mut self, level: i32) -> f64 {
        let clamped = level.clamp(0, 100) as u8;
        self.volume = clamped;
        if clamped == 0 {
            self.muted = true;
        } else {
            self.muted = false;
            self.last_audible = clamped;
        }
        self.gain()
    }

    /// Flip the mute flag
    ///
    /// Unmuting at volume 0 restores the last audible volume instead of
    /// leaving a "muted but volume shows 0" dead state. Returns the
    /// effective engine gain.
    pub(crate) fn toggle_mute(&mut self) -> f64 {
        if self.muted {
            self.muted = false;
            if self.volume == 0 {
                self.volume = self.last_audible;
            }
        } else {
            if self.volume > 0 {
                self.last_audible = self.volume;
            }
            self.muted = true;
        }
        self.gain()
    }

    pub(crate) fn show_controls(&mut self) {
        self.controls_visible = true;
    }

    pub(crate) fn hide_controls(&mut self) {
        self.controls_visible = false;
    }

    fn clamp_position(&self, target: f64) -> f64 {
        let target = if target.is_finite() { target.max(0.0) } else { 0.0 };
        match self.duration {
            Some(duration) => target.min(duration),
            None => target,
        }
    }
}
