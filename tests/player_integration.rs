//! Integration tests for the mediactl playback controller
//!
//! These tests drive the full controller against a scripted engine and
//! verify:
//! - Volume/mute reconciliation
//! - Seek clamping
//! - End-of-stream and loop behavior
//! - The idle-hide timer
//! - Teardown semantics

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use mediactl::{
    ControlsRenderer, ControlsView, EngineEvent, MediaEngine, PlaybackController, PlaybackHooks,
    PlayerError, PlayerOptions, Result,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Engine double that records every command and mirrors a gain value
#[derive(Default)]
struct EngineState {
    commands: Vec<String>,
    gain: f64,
    refuse_play: bool,
}

struct ScriptedEngine {
    state: Rc<RefCell<EngineState>>,
}

impl ScriptedEngine {
    fn pair() -> (Box<Self>, Rc<RefCell<EngineState>>) {
        let state = Rc::new(RefCell::new(EngineState::default()));
        (
            Box::new(Self {
                state: Rc::clone(&state),
            }),
            state,
        )
    }
}

impl MediaEngine for ScriptedEngine {
    fn play(&mut self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.commands.push("play".to_string());
        if state.refuse_play {
            return Err(PlayerError::engine("playback blocked by platform"));
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.state.borrow_mut().commands.push("pause".to_string());
        Ok(())
    }

    fn set_position(&mut self, seconds: f64) -> Result<()> {
        self.state
            .borrow_mut()
            .commands
            .push(format!("position {:.1}", seconds));
        Ok(())
    }

    fn set_gain(&mut self, gain: f64) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.gain = gain;
        state.commands.push(format!("gain {:.2}", gain));
        Ok(())
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.state
            .borrow_mut()
            .commands
            .push("fullscreen".to_string());
        Ok(())
    }
}

#[derive(Default)]
struct Transitions {
    plays: u32,
    pauses: u32,
    ends: u32,
}

struct RecordingHooks {
    transitions: Rc<RefCell<Transitions>>,
}

impl PlaybackHooks for RecordingHooks {
    fn on_play(&mut self) {
        self.transitions.borrow_mut().plays += 1;
    }

    fn on_pause(&mut self) {
        self.transitions.borrow_mut().pauses += 1;
    }

    fn on_ended(&mut self) {
        self.transitions.borrow_mut().ends += 1;
    }
}

struct ViewLog {
    views: Rc<RefCell<Vec<ControlsView>>>,
}

impl ControlsRenderer for ViewLog {
    fn render(&mut self, view: &ControlsView) {
        self.views.borrow_mut().push(view.clone());
    }
}

struct Fixture {
    player: PlaybackController,
    engine: Rc<RefCell<EngineState>>,
    transitions: Rc<RefCell<Transitions>>,
}

fn fixture(options: PlayerOptions) -> Fixture {
    init_logging();
    let (engine, state) = ScriptedEngine::pair();
    let transitions = Rc::new(RefCell::new(Transitions::default()));
    let player = PlaybackController::builder()
        .with_options(options)
        .with_hooks(Box::new(RecordingHooks {
            transitions: Rc::clone(&transitions),
        }))
        .build(engine)
        .expect("controller should build");
    Fixture {
        player,
        engine: state,
        transitions,
    }
}

#[test]
fn volume_scenarios_from_the_control_bar() {
    let mut f = fixture(PlayerOptions::default());

    // Drag below zero: clamps to 0 and mutes
    f.player.set_volume(-10);
    assert_eq!(f.player.volume(), 0);
    assert!(f.player.is_muted());
    assert_eq!(f.engine.borrow().gain, 0.0);

    // Drag above the scale: clamps to 100 and unmutes
    f.player.set_volume(250);
    assert_eq!(f.player.volume(), 100);
    assert!(!f.player.is_muted());
    assert_eq!(f.engine.borrow().gain, 1.0);

    // Mute keeps the displayed volume but silences the engine
    f.player.set_volume(40);
    f.player.toggle_mute();
    assert_eq!(f.player.volume(), 40);
    assert!(f.player.is_muted());
    assert_eq!(f.engine.borrow().gain, 0.0);

    // Unmute restores the remembered volume
    f.player.toggle_mute();
    assert_eq!(f.player.volume(), 40);
    assert!((f.engine.borrow().gain - 0.4).abs() < 1e-9);
}

#[test]
fn unmute_at_zero_volume_restores_fallback() {
    let mut f = fixture(PlayerOptions {
        muted: true,
        ..PlayerOptions::default()
    });
    assert_eq!(f.player.volume(), 0);

    f.player.toggle_mute();
    assert!(!f.player.is_muted());
    assert_eq!(f.player.volume(), 50);
    assert!((f.engine.borrow().gain - 0.5).abs() < 1e-9);
}

#[test]
fn seek_clamps_against_loaded_duration() {
    let mut f = fixture(PlayerOptions::default());
    f.player
        .handle_engine_event(EngineEvent::LoadedMetadata { duration: 120.0 });

    f.player.seek(500.0);
    assert_eq!(f.player.position(), 120.0);

    f.player.seek(-3.0);
    assert_eq!(f.player.position(), 0.0);

    let commands = &f.engine.borrow().commands;
    assert!(commands.contains(&"position 120.0".to_string()));
    assert!(commands.contains(&"position 0.0".to_string()));
}

#[test]
fn time_updates_apply_in_order() {
    let mut f = fixture(PlayerOptions::default());
    f.player
        .handle_engine_event(EngineEvent::LoadedMetadata { duration: 10.0 });
    for tenth in 0..=100 {
        f.player.handle_engine_event(EngineEvent::TimeUpdate {
            position: f64::from(tenth) / 10.0,
        });
    }
    assert_eq!(f.player.position(), 10.0);
    assert_eq!(f.player.controls().elapsed, "0:10");
}

#[test]
fn end_of_stream_without_loop() {
    let mut f = fixture(PlayerOptions::default());
    f.player.toggle_play();
    assert!(f.player.is_playing());

    f.player.handle_engine_event(EngineEvent::Ended);
    assert!(!f.player.is_playing());
    assert_eq!(f.transitions.borrow().ends, 1);
}

#[test]
fn end_of_stream_with_loop_restarts_from_zero() {
    let mut f = fixture(PlayerOptions {
        looping: true,
        ..PlayerOptions::default()
    });
    f.player.toggle_play();
    f.player
        .handle_engine_event(EngineEvent::LoadedMetadata { duration: 42.0 });
    f.player
        .handle_engine_event(EngineEvent::TimeUpdate { position: 42.0 });
    f.player.handle_engine_event(EngineEvent::Ended);

    assert!(f.player.is_playing());
    assert_eq!(f.player.position(), 0.0);
    assert_eq!(f.transitions.borrow().ends, 1);
}

#[test]
fn idle_timer_hides_controls_during_playback() {
    let mut f = fixture(PlayerOptions::default());
    f.player.toggle_play();
    assert!(f.player.controls_visible());

    // Before the window expires the overlay stays up
    f.player.tick(Instant::now());
    assert!(f.player.controls_visible());

    // A full idle window after the last interaction hides the overlay
    f.player.tick(Instant::now() + Duration::from_millis(3001));
    assert!(!f.player.controls_visible());

    // Any new interaction brings it back
    f.player.pointer_moved();
    assert!(f.player.controls_visible());
}

#[test]
fn interaction_resets_idle_window() {
    let mut f = fixture(PlayerOptions {
        idle_hide_ms: 200,
        ..PlayerOptions::default()
    });
    f.player.toggle_play();

    std::thread::sleep(Duration::from_millis(120));
    f.player.pointer_moved();

    // 120ms later the original window has lapsed but the reset one has not
    std::thread::sleep(Duration::from_millis(120));
    f.player.tick(Instant::now());
    assert!(f.player.controls_visible());

    std::thread::sleep(Duration::from_millis(120));
    f.player.tick(Instant::now());
    assert!(!f.player.controls_visible());
}

#[test]
fn overlay_stays_visible_while_paused() {
    let mut f = fixture(PlayerOptions::default());
    assert!(f.player.controls_visible());

    f.player.pointer_left();
    assert!(f.player.controls_visible());

    f.player.tick(Instant::now() + Duration::from_secs(60));
    assert!(f.player.controls_visible());
}

#[test]
fn pointer_leave_hides_immediately_while_playing() {
    let mut f = fixture(PlayerOptions::default());
    f.player.toggle_play();
    f.player.pointer_moved();
    assert!(f.player.controls_visible());

    f.player.pointer_left();
    assert!(!f.player.controls_visible());
}

#[test]
fn custom_idle_window_is_honored() {
    let mut f = fixture(PlayerOptions {
        idle_hide_ms: 500,
        ..PlayerOptions::default()
    });
    f.player.toggle_play();
    f.player.tick(Instant::now() + Duration::from_millis(501));
    assert!(!f.player.controls_visible());
}

#[test]
fn renderer_sees_every_applied_change() {
    init_logging();
    let (engine, _state) = ScriptedEngine::pair();
    let views = Rc::new(RefCell::new(Vec::new()));
    let mut player = PlaybackController::builder()
        .with_renderer(Box::new(ViewLog {
            views: Rc::clone(&views),
        }))
        .build(engine)
        .expect("controller should build");

    player.toggle_play();
    player.handle_engine_event(EngineEvent::LoadedMetadata { duration: 60.0 });
    player.handle_engine_event(EngineEvent::TimeUpdate { position: 5.0 });

    let views = views.borrow();
    let last = views.last().expect("renders recorded");
    assert!(last.playing);
    assert_eq!(last.position, 5.0);
    assert_eq!(last.total, "1:00");
}

#[test]
fn fullscreen_delegates_to_capable_engine() {
    let mut f = fixture(PlayerOptions::default());
    f.player.request_fullscreen();
    assert!(f
        .engine
        .borrow()
        .commands
        .contains(&"fullscreen".to_string()));
}

#[test]
fn shutdown_stops_mutations_and_callbacks() {
    let mut f = fixture(PlayerOptions::default());
    f.player.toggle_play();
    f.player.pointer_moved(); // hide timer now pending
    let commands_before = f.engine.borrow().commands.len();

    f.player.shutdown();

    f.player.toggle_play();
    f.player.seek(10.0);
    f.player.set_volume(5);
    f.player.toggle_mute();
    f.player.pointer_moved();
    f.player.handle_engine_event(EngineEvent::Ended);
    f.player.tick(Instant::now() + Duration::from_secs(30));

    assert!(f.player.is_playing());
    assert_eq!(f.engine.borrow().commands.len(), commands_before);
    let transitions = f.transitions.borrow();
    assert_eq!(
        (transitions.plays, transitions.pauses, transitions.ends),
        (1, 0, 0)
    );
}

#[test]
fn drop_with_pending_timer_is_clean() {
    let f = fixture(PlayerOptions {
        autoplay: true,
        ..PlayerOptions::default()
    });
    let transitions = Rc::clone(&f.transitions);

    let mut player = f.player;
    player.pointer_moved(); // hide timer now pending
    drop(player);

    // Only the autoplay transition ever fired
    assert_eq!(transitions.borrow().plays, 1);
    assert_eq!(transitions.borrow().ends, 0);
}
