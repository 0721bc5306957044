//! Control overlay for mediactl
//!
//! The overlay itself is drawn by the host; this module provides the view
//! model snapshot the host renders from and the renderer capability it
//! injects, plus the idle timer that governs auto-hiding.

mod timer;

pub use timer::IdleTimer;

use crate::player::PlaybackSession;
use crate::utils::format_time;

/// Snapshot of everything the control overlay displays
///
/// Captured after every applied state change. `visible` already folds in the
/// render rule: the overlay shows while paused or within the idle window
/// after activity, and never when the host disabled controls outright.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    /// Whether the overlay should be shown
    pub visible: bool,

    /// Play/pause toggle state
    pub playing: bool,

    /// Mute toggle state
    pub muted: bool,

    /// Volume control position (0-100)
    pub volume: u8,

    /// Progress control position in seconds
    pub position: f64,

    /// Progress control range in seconds; 0 until metadata loads
    pub duration: f64,

    /// Elapsed time display, `M:SS`
    pub elapsed: String,

    /// Total time display, `M:SS`
    pub total: String,
}

impl ControlsView {
    pub(crate) fn capture(session: &PlaybackSession, show_controls: bool) -> Self {
        let duration = session.duration().unwrap_or(0.0);
        Self {
            visible: show_controls && (session.controls_visible() || !session.is_playing()),
            playing: session.is_playing(),
            muted: session.is_muted(),
            volume: session.volume(),
            position: session.position(),
            duration,
            elapsed: format_time(session.position()),
            total: format_time(duration),
        }
    }
}

/// Renderer capability injected by the host
///
/// Replaces render-prop style customization: the host supplies one object
/// that knows how to present a [`ControlsView`], and the controller invokes
/// it after every applied state change. Hosts are free to coalesce
/// consecutive time-update renders to their own refresh granularity.
pub trait ControlsRenderer {
    /// Present the overlay
    fn render(&mut self, view: &ControlsView);
}
