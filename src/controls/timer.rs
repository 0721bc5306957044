//! Idle-hide timer for the control overlay
//!
//! A single-slot cooperative timer: arming replaces any pending deadline, so
//! at most one countdown exists per session. The host's event loop drives it
//! through [`IdleTimer::fire_if_expired`]; nothing is scheduled on another
//! thread, which makes cancellation on teardown a plain field reset.

use std::time::{Duration, Instant};

/// Countdown that hides the overlay after an idle window
#[derive(Debug)]
pub struct IdleTimer {
    /// Idle window length
    window: Duration,

    /// Pending deadline, if armed
    deadline: Option<Instant>,
}

impl IdleTimer {
    /// Create a timer with the given idle window
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Start or restart the countdown from `now`
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// Drop any pending deadline
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a countdown is pending
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed
    ///
    /// Fires at most once per arm; an expired timer disarms itself.
    pub fn fire_if_expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
