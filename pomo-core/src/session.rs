//! Pomodoro session state machine.
//!
//! The machine owns no clock. The caller feeds it one `tick` per elapsed
//! time unit (nominally a second) and the user-facing operations `start`,
//! `pause`, `reset` and `end_session`.
//!
//! ```text
//! Work --(count % 4 != 0)--> ShortBreak --> Work
//! Work --(count % 4 == 0)--> LongBreak  --> Work
//! ```
//!
//! A session that runs out on its own flows straight into the next one,
//! still running. A session ended by hand stops at the start of the next one.

use std::time::Duration;

use crate::durations::{DurationConfig, SessionType, LONG_BREAK_INTERVAL};

/// Length of one countdown tick.
pub const TICK: Duration = Duration::from_secs(1);

/// What a single `tick` did to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused; nothing changed.
    Idle,
    /// The countdown moved.
    Counted,
    /// The countdown hit zero and the next session began.
    Advanced { from: SessionType, to: SessionType },
}

#[derive(Debug, Clone)]
pub struct TimerState {
    durations: DurationConfig,
    session_type: SessionType,
    session_count: u32,
    running: bool,
    remaining: Duration,
    total: Duration,
}

impl TimerState {
    pub fn new(durations: DurationConfig) -> Self {
        let total = durations.resolve(SessionType::Work);
        Self {
            durations,
            session_type: SessionType::Work,
            session_count: 0,
            running: false,
            remaining: total,
            total,
        }
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// Number of completed work sessions.
    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Duration the current session started with.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn elapsed(&self) -> Duration {
        self.total.saturating_sub(self.remaining)
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and rewind the current session to its full length.
    pub fn reset(&mut self) {
        self.running = false;
        self.total = self.durations.resolve(self.session_type);
        self.remaining = self.total;
    }

    pub fn tick(&mut self, unit: Duration) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(unit);
        if !self.remaining.is_zero() {
            return TickOutcome::Counted;
        }

        let from = self.session_type;
        self.advance();
        self.running = true;
        tracing::info!(
            from = %from,
            to = %self.session_type,
            sessions = self.session_count,
            "session finished, continuing"
        );
        TickOutcome::Advanced {
            from,
            to: self.session_type,
        }
    }

    /// Skip the rest of the current session. The next session starts paused.
    pub fn end_session(&mut self) {
        self.running = false;
        let from = self.session_type;
        self.advance();
        tracing::info!(
            from = %from,
            to = %self.session_type,
            sessions = self.session_count,
            "session ended early"
        );
    }

    fn advance(&mut self) {
        self.session_type = match self.session_type {
            SessionType::Work => {
                self.session_count += 1;
                if self.session_count % LONG_BREAK_INTERVAL == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Work,
        };
        self.total = self.durations.resolve(self.session_type);
        self.remaining = self.total;
    }
}
