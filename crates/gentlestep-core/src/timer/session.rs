//! Session timer implementation.
//!
//! The session timer is a wall-clock-based state machine. It does not use
//! internal threads; the caller (usually [`ActiveSession`](super::ActiveSession))
//! is responsible for calling `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused
//!         Running -> Finished   (automatic, terminal)
//! ```
//!
//! Resuming does not store elapsed time separately. `start()` back-dates the
//! start reference by `progress * duration`, so the next tick picks up exactly
//! where the last one left off.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::clock::{Clock, SystemClock};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Published state of one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Normalized elapsed fraction, always within `0.0..=1.0`.
    pub progress: f64,
    pub is_running: bool,
    pub is_finished: bool,
}

impl SessionState {
    pub const IDLE: SessionState = SessionState {
        progress: 0.0,
        is_running: false,
        is_finished: false,
    };

}

impl Default for SessionState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Start/pause/resume/finish timer for a single exercise visit.
#[derive(Debug, Clone)]
pub struct SessionTimer<C: Clock = SystemClock> {
    clock: C,
    duration_ms: u64,
    state: SessionState,
    /// Tracked separately from `state`: a session stopped before its first
    /// tick is Paused even though its progress is still zero.
    phase: SessionPhase,
    /// Effective start (clock ms) while running, back-dated by prior progress.
    /// Signed so a simulated clock near zero can still be back-dated.
    anchor_ms: Option<i64>,
}

impl SessionTimer<SystemClock> {
    pub fn new(duration: Duration) -> Self {
        Self::with_clock(duration, SystemClock)
    }
}

impl<C: Clock> SessionTimer<C> {
    pub fn with_clock(duration: Duration, clock: C) -> Self {
        Self {
            clock,
            duration_ms: duration.as_millis() as u64,
            state: SessionState::IDLE,
            phase: SessionPhase::Idle,
            anchor_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin or resume ticking. No-op while running or once finished.
    pub fn start(&mut self) -> Option<Event> {
        match self.phase() {
            SessionPhase::Running | SessionPhase::Finished => None,
            SessionPhase::Idle | SessionPhase::Paused => {
                let now = self.clock.now_ms() as i64;
                let already_ms = (self.state.progress * self.duration_ms as f64).round() as i64;
                self.anchor_ms = Some(now - already_ms);
                self.state.is_running = true;
                self.state.is_finished = false;
                self.phase = SessionPhase::Running;
                tracing::debug!(progress = self.state.progress, "session started");
                Some(Event::SessionStarted {
                    progress: self.state.progress,
                    duration_ms: self.duration_ms,
                    at: Utc::now(),
                })
            }
        }
    }

    /// Manual pause. Progress stays at the last published value.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        self.state.is_running = false;
        self.phase = SessionPhase::Paused;
        self.anchor_ms = None;
        tracing::debug!(progress = self.state.progress, "session paused");
        Some(Event::SessionPaused {
            progress: self.state.progress,
            at: Utc::now(),
        })
    }

    pub fn toggle(&mut self) -> Option<Event> {
        if self.state.is_running {
            self.stop()
        } else {
            self.start()
        }
    }

    /// Call periodically. Returns `Some(Event::SessionFinished)` on the tick
    /// that reaches full progress.
    pub fn tick(&mut self) -> Option<Event> {
        let anchor = match (self.state.is_running, self.anchor_ms) {
            (true, Some(anchor)) => anchor,
            _ => return None,
        };

        let elapsed_ms = (self.clock.now_ms() as i64 - anchor).max(0);
        let computed = if self.duration_ms == 0 {
            1.0
        } else {
            (elapsed_ms as f64 / self.duration_ms as f64).min(1.0)
        };
        // Rounding the back-dated anchor may land a hair below the value we
        // resumed from; progress never moves backwards while running.
        self.state.progress = computed.max(self.state.progress);

        if self.state.progress >= 1.0 {
            self.state.progress = 1.0;
            self.state.is_finished = true;
            self.state.is_running = false;
            self.phase = SessionPhase::Finished;
            self.anchor_ms = None;
            tracing::debug!(duration_ms = self.duration_ms, "session finished");
            return Some(Event::SessionFinished {
                duration_ms: self.duration_ms,
                at: Utc::now(),
            });
        }
        None
    }

    /// Seconds left, rounded up.
    pub fn remaining_secs(&self) -> u64 {
        remaining_secs(self.duration(), self.state.progress)
    }
}

pub(crate) fn remaining_secs(duration: Duration, progress: f64) -> u64 {
    let remaining = duration.as_secs_f64() * (1.0 - progress.clamp(0.0, 1.0));
    remaining.max(0.0).ceil() as u64
}
