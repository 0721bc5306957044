//! Playback controller module for mediactl
//!
//! This module owns the playback state machine and the control surface that
//! drives it. Host interactions (clicks, drags, pointer moves) come in as
//! method calls on [`PlaybackController`], engine events come in through
//! [`PlaybackController::handle_engine_event`], and the session state is
//! reconciled against what the engine actually did.

mod controller;
mod session;

pub use controller::{PlaybackController, PlaybackControllerBuilder};
pub use session::PlaybackSession;

use serde::{Deserialize, Serialize};

/// Playback state
///
/// A projection of engine truth, not an independent source of it: the
/// controller only enters `Playing` once the engine accepted the play
/// command, and leaves it when the engine pauses or reports end of stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not advancing; the initial state
    Paused,

    /// Media actively advancing
    Playing,

    /// End of stream reached
    Ended,
}

/// Host-supplied player configuration
///
/// A closed struct: every knob the controller honors is enumerated here with
/// a default, rather than spread through loosely-typed option bags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerOptions {
    /// Source URL or descriptor; the host hands it to its engine, the
    /// controller only reports it
    pub source: String,

    /// Attempt playback as soon as the controller is built
    pub autoplay: bool,

    /// Start muted (most platforms only permit muted autoplay)
    pub muted: bool,

    /// Reconcile end-of-stream back into playback at position 0; the engine
    /// performs the actual rewind
    pub looping: bool,

    /// Poster image shown before playback; layout hint for the host
    pub poster: Option<String>,

    /// Render the control overlay at all
    pub show_controls: bool,

    /// Player width in pixels; layout hint for the host
    pub width: Option<u32>,

    /// Player height in pixels; layout hint for the host
    pub height: Option<u32>,

    /// Idle window in milliseconds before the overlay auto-hides during
    /// playback
    pub idle_hide_ms: u64,

    /// Volume restored by unmuting when no nonzero volume has been recorded
    pub restore_volume: u8,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            source: String::new(),
            autoplay: false,
            muted: false,
            looping: false,
            poster: None,
            show_controls: true,
            width: None,
            height: None,
            idle_hide_ms: 3000,
            restore_volume: 50,
        }
    }
}

/// Host callbacks for playback transitions
///
/// A capability interface injected at build time instead of bare function
/// props. All methods default to no-ops so hosts implement only what they
/// observe.
pub trait PlaybackHooks {
    /// Playback started or resumed
    fn on_play(&mut self) {}

    /// Playback paused
    fn on_pause(&mut self) {}

    /// End of stream reached
    fn on_ended(&mut self) {}
}

/// Hooks implementation for hosts that ignore transitions
pub struct NoHooks;

impl PlaybackHooks for NoHooks {}
