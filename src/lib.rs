//! mediactl - an embeddable media playback controller
//!
//! mediactl wraps a host-provided media engine with a small, single-threaded
//! playback controller: a play/pause/ended state machine, a transport
//! control surface (seek, volume, mute, fullscreen), and an auto-hiding
//! control overlay driven by a cancellable idle timer.
//!
//! The engine owns ground truth. The host implements [`MediaEngine`] over
//! whatever its platform provides, feeds engine events to
//! [`PlaybackController::handle_engine_event`] in emission order, and drives
//! the idle timer from its event loop via [`PlaybackController::tick`].
//! Transition callbacks and overlay rendering are injected as capability
//! objects ([`PlaybackHooks`], [`ControlsRenderer`]) at build time.
//!
//! The controller never spawns threads and never schedules work beyond the
//! single-slot hide timer; dropping it cancels that timer and detaches it
//! from engine events, so nothing fires after the session is gone.

pub mod controls;
pub mod engine;
pub mod player;
pub mod utils;

pub use controls::{ControlsRenderer, ControlsView, IdleTimer};
pub use engine::{EngineEvent, MediaEngine};
pub use player::{
    NoHooks, PlaybackController, PlaybackControllerBuilder, PlaybackHooks, PlaybackSession,
    PlaybackState, PlayerOptions,
};
pub use utils::error::{PlayerError, Result};
pub use utils::format_time;
