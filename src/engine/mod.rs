//! Media engine abstraction for mediactl
//!
//! The engine is the external collaborator that actually decodes and renders
//! media. It owns ground truth for playback position and end-of-stream; the
//! controller only commands it and reconciles session state against the
//! events it emits.

use crate::utils::error::{PlayerError, Result};

/// Interface to the platform's media capability
///
/// Implementations wrap whatever the host environment provides: a native
/// media element, a decoding service, a test double. Commands are
/// fire-and-forget from the controller's point of view: a returned error is
/// logged and the session keeps mirroring what the engine actually did.
pub trait MediaEngine {
    /// Start or resume playback
    ///
    /// May fail when the platform refuses unsolicited playback (blocked
    /// autoplay being the common case); the controller leaves the session
    /// paused when that happens.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Move the playback cursor
    ///
    /// # Arguments
    ///
    /// * `seconds` - Target position; already clamped by the caller
    fn set_position(&mut self, seconds: f64) -> Result<()>;

    /// Set the output gain
    ///
    /// # Arguments
    ///
    /// * `gain` - Output gain in `[0.0, 1.0]`; mute is expressed as gain 0
    fn set_gain(&mut self, gain: f64) -> Result<()>;

    /// Ask the platform to present the media surface fullscreen
    ///
    /// Engines without the capability keep the default implementation; the
    /// controller treats `Unsupported` as a silent no-op.
    fn request_fullscreen(&mut self) -> Result<()> {
        Err(PlayerError::Unsupported("fullscreen"))
    }
}

/// Engine-originated event
///
/// Delivered by the host to [`PlaybackController::handle_engine_event`] in
/// the order the engine emits them. Time updates may arrive at any
/// granularity; `Ended` is semantic and must never be dropped.
///
/// [`PlaybackController::handle_engine_event`]: crate::player::PlaybackController::handle_engine_event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    /// The playback cursor advanced
    TimeUpdate {
        /// Current position in seconds
        position: f64,
    },

    /// Media metadata became available
    LoadedMetadata {
        /// Total media length in seconds
        duration: f64,
    },

    /// End of stream reached
    Ended,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareEngine;

    impl MediaEngine for BareEngine {
        fn play(&mut self) -> Result<()> {
            Ok(())
        }

        fn pause(&mut self) -> Result<()> {
            Ok(())
        }

        fn set_position(&mut self, _seconds: f64) -> Result<()> {
            Ok(())
        }

        fn set_gain(&mut self, _gain: f64) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_fullscreen_defaults_to_unsupported() {
        let mut engine = BareEngine;
        match engine.request_fullscreen() {
            Err(PlayerError::Unsupported(cap)) => assert_eq!(cap, "fullscreen"),
            other => panic!("Expected Unsupported, got {:?}", other),
        }
    }
}
