use pomo_core::TICK;
use std::time::{Duration, Instant};

/// Turns wall-clock time into whole timer ticks.
///
/// While the timer runs, one tick is owed per full period since the anchor,
/// and ticks missed during a stall are all paid out at once. While paused the
/// anchor follows the clock, so nothing is banked and the first tick after a
/// start lands one full period later.
#[derive(Debug, Clone, Copy)]
pub(super) struct TickClock {
    anchor: Instant,
    period: Duration,
}

impl TickClock {
    pub(super) fn new(now: Instant) -> Self {
        Self {
            anchor: now,
            period: TICK,
        }
    }

    /// Number of ticks due at `now`.
    pub(super) fn due(&mut self, now: Instant, running: bool) -> u32 {
        if !running {
            self.anchor = now;
            return 0;
        }

        let mut ticks = 0u32;
        while now.saturating_duration_since(self.anchor) >= self.period {
            self.anchor += self.period;
            ticks = ticks.saturating_add(1);
        }
        ticks
    }
}
