//! Playback controller implementation for mediactl
//!
//! This module provides the control surface that sits between the host UI
//! and the media engine. Transport actions command the engine and update the
//! session, engine events are applied in arrival order, and the idle timer
//! decides when the overlay auto-hides. Everything runs on the host's event
//! loop; there is no internal threading.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::controls::{ControlsRenderer, ControlsView, IdleTimer};
use crate::engine::{EngineEvent, MediaEngine};
use crate::player::session::PlaybackSession;
use crate::player::{NoHooks, PlaybackHooks, PlaybackState, PlayerOptions};
use crate::utils::error::{PlayerError, Result};

/// Builder for a customized playback controller
pub struct PlaybackControllerBuilder {
    options: PlayerOptions,
    hooks: Box<dyn PlaybackHooks>,
    renderer: Option<Box<dyn ControlsRenderer>>,
}

impl PlaybackControllerBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            options: PlayerOptions::default(),
            hooks: Box::new(NoHooks),
            renderer: None,
        }
    }

    /// Set player options
    pub fn with_options(mut self, options: PlayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Set playback transition hooks
    pub fn with_hooks(mut self, hooks: Box<dyn PlaybackHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Set the overlay renderer
    pub fn with_renderer(mut self, renderer: Box<dyn ControlsRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Build the controller around a host-provided engine
    ///
    /// Pushes the initial gain to the engine and, when `autoplay` is set,
    /// attempts playback with the usual blocked-autoplay reconciliation.
    pub fn build(self, engine: Box<dyn MediaEngine>) -> Result<PlaybackController> {
        if self.options.idle_hide_ms == 0 {
            return Err(PlayerError::Config(
                "idle_hide_ms must be nonzero".to_string(),
            ));
        }

        let session = PlaybackSession::new(&self.options);
        let hide_timer = IdleTimer::new(Duration::from_millis(self.options.idle_hide_ms));
        let autoplay = self.options.autoplay;

        let mut controller = PlaybackController {
            options: self.options,
            session,
            engine,
            hooks: self.hooks,
            renderer: self.renderer,
            hide_timer,
            detached: false,
        };

        let gain = controller.session.gain();
        if let Err(e) = controller.engine.set_gain(gain) {
            warn!("Initial volume command failed: {}", e);
        }

        if autoplay {
            controller.start_playback();
        }

        controller.refresh();
        Ok(controller)
    }
}

impl Default for PlaybackControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Media playback controller
///
/// Owns one [`PlaybackSession`] for its lifetime. Dropping the controller
/// (or calling [`shutdown`](Self::shutdown)) cancels the pending hide timer
/// and detaches it from engine events; afterwards no state mutation, hook
/// invocation, or render occurs.
pub struct PlaybackController {
    options: PlayerOptions,
    session: PlaybackSession,
    engine: Box<dyn MediaEngine>,
    hooks: Box<dyn PlaybackHooks>,
    renderer: Option<Box<dyn ControlsRenderer>>,
    hide_timer: IdleTimer,
    detached: bool,
}

impl PlaybackController {
    /// Create a builder for customized construction
    pub fn builder() -> PlaybackControllerBuilder {
        PlaybackControllerBuilder::new()
    }

    /// Create a controller with the given options and no hooks or renderer
    pub fn new(options: PlayerOptions, engine: Box<dyn MediaEngine>) -> Result<Self> {
        PlaybackControllerBuilder::new()
            .with_options(options)
            .build(engine)
    }

    /// Toggle play/pause
    ///
    /// The session only enters `Playing` once the engine accepted the play
    /// command; a refused start (blocked autoplay) leaves it paused and
    /// fires no hook. From `Ended`, toggling restarts playback.
    pub fn toggle_play(&mut self) {
        if self.detached {
            return;
        }

        if self.session.is_playing() {
            match self.engine.pause() {
                Ok(()) => {
                    self.session.mark_paused();
                    info!("Playback paused");
                    self.hooks.on_pause();
                }
                Err(e) => warn!("Engine pause failed: {}", e),
            }
        } else {
            self.start_playback();
        }

        self.note_activity(Instant::now());
        self.refresh();
    }

    /// Seek to `target` seconds
    ///
    /// Out-of-range targets are silently clamped into `[0, duration]`, never
    /// rejected. The cursor updates optimistically; play state is unchanged.
    pub fn seek(&mut self, target: f64) {
        if self.detached {
            return;
        }

        let position = self.session.seek(target);
        if let Err(e) = self.engine.set_position(position) {
            warn!("Engine seek failed: {}", e);
        }
        debug!("Seek to {:.3}s", position);

        self.note_activity(Instant::now());
        self.refresh();
    }

    /// Set the user-facing volume
    ///
    /// Clamped to 0-100. Volume 0 implies mute; any audible volume clears
    /// mute and becomes the unmute restore target.
    pub fn set_volume(&mut self, level: i32) {
        if self.detached {
            return;
        }

        let gain = self.session.set_volume(level);
        if let Err(e) = self.engine.set_gain(gain) {
            warn!("Engine volume command failed: {}", e);
        }
        debug!("Volume set to {}", self.session.volume());

        self.note_activity(Instant::now());
        self.refresh();
    }

    /// Toggle mute
    ///
    /// Unmuting at volume 0 restores the last audible volume (or the
    /// configured fallback, default 50).
    pub fn toggle_mute(&mut self) {
        if self.detached {
            return;
        }

        let gain = self.session.toggle_mute();
        if let Err(e) = self.engine.set_gain(gain) {
            warn!("Engine volume command failed: {}", e);
        }
        debug!(
            "Mute {} at volume {}",
            if self.session.is_muted() { "on" } else { "off" },
            self.session.volume()
        );

        self.note_activity(Instant::now());
        self.refresh();
    }

    /// Ask the platform to present the media surface fullscreen
    ///
    /// A silent no-op when the engine lacks the capability.
    pub fn request_fullscreen(&mut self) {
        if self.detached {
            return;
        }

        match self.engine.request_fullscreen() {
            Ok(()) => info!("Fullscreen requested"),
            Err(PlayerError::Unsupported(capability)) => {
                debug!("Engine lacks {} support, ignoring", capability)
            }
            Err(e) => warn!("Fullscreen request failed: {}", e),
        }

        self.note_activity(Instant::now());
        self.refresh();
    }

    /// Host reports pointer movement over the media surface
    pub fn pointer_moved(&mut self) {
        if self.detached {
            return;
        }
        self.note_activity(Instant::now());
        self.refresh();
    }

    /// Host reports the pointer leaving the media surface
    ///
    /// Hides the overlay immediately, independent of the timer; the render
    /// rule keeps it up while paused.
    pub fn pointer_left(&mut self) {
        if self.detached {
            return;
        }
        self.hide_timer.cancel();
        self.session.hide_controls();
        self.refresh();
    }

    /// Drive the idle timer from the host's event loop
    ///
    /// On expiry while playing, the overlay hides. Call with the loop's
    /// frame timestamp; granularity only affects how promptly the hide
    /// lands.
    pub fn tick(&mut self, now: Instant) {
        if self.detached {
            return;
        }
        if self.hide_timer.fire_if_expired(now) && self.session.is_playing() {
            self.session.hide_controls();
            debug!("Controls hidden after idle window");
            self.refresh();
        }
    }

    /// Apply an engine-originated event
    ///
    /// Events must be delivered in the order the engine emits them; each is
    /// applied synchronously. `Ended` only acts on a playing session, so a
    /// duplicate end-of-stream report cannot re-fire hooks.
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        if self.detached {
            return;
        }

        match event {
            EngineEvent::TimeUpdate { position } => {
                self.session.update_position(position);
            }
            EngineEvent::LoadedMetadata { duration } => {
                self.session.set_duration(duration);
                info!("Media metadata loaded: duration {:.3}s", duration);
            }
            EngineEvent::Ended => {
                if !self.session.is_playing() {
                    debug!("Ignoring end-of-stream while not playing");
                    return;
                }
                self.session.mark_ended();
                info!("End of stream");
                self.hooks.on_ended();
                if self.options.looping {
                    // The engine performs the actual rewind; the session
                    // just reconciles.
                    self.session.rewind();
                    self.session.mark_playing();
                }
            }
        }

        self.refresh();
    }

    /// Snapshot the control overlay
    pub fn controls(&self) -> ControlsView {
        ControlsView::capture(&self.session, self.options.show_controls)
    }

    /// Read access to the full session state
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Options this controller was built with
    pub fn options(&self) -> &PlayerOptions {
        &self.options
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.session.state()
    }

    /// Whether media is actively advancing
    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Playback cursor in seconds
    pub fn position(&self) -> f64 {
        self.session.position()
    }

    /// Media length in seconds, `None` until metadata loads
    pub fn duration(&self) -> Option<f64> {
        self.session.duration()
    }

    /// User-facing volume (0-100)
    pub fn volume(&self) -> u8 {
        self.session.volume()
    }

    /// Whether audio output is muted
    pub fn is_muted(&self) -> bool {
        self.session.is_muted()
    }

    /// Whether the overlay is currently shown
    pub fn controls_visible(&self) -> bool {
        self.controls().visible
    }

    /// Tear the session down
    ///
    /// Cancels the pending hide timer and stops accepting host actions and
    /// engine events. Idempotent; also runs on drop.
    pub fn shutdown(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.hide_timer.cancel();
        info!("Playback session shut down");
    }

    fn start_playback(&mut self) {
        match self.engine.play() {
            Ok(()) => {
                self.session.mark_playing();
                info!("Playback started");
                self.hooks.on_play();
            }
            Err(e) => {
                // Engine truth wins: a refused start leaves the session
                // paused.
                warn!("Engine refused to start playback: {}", e);
            }
        }
    }

    fn note_activity(&mut self, now: Instant) {
        self.session.show_controls();
        self.hide_timer.arm(now);
    }

    fn refresh(&mut self) {
        if self.renderer.is_none() {
            return;
        }
        let view = ControlsView::capture(&self.session, self.options.show_controls);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&view);
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
