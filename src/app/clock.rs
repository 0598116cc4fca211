use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame loop at a fixed rate.
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left until the next tick boundary, as seen from `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Sleeps until the next tick boundary. A frame that overran restarts
    /// the schedule instead of trying to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let left = self.remaining(now);
        if left.is_zero() {
            self.next = now + self.period;
        } else {
            thread::sleep(left);
            self.next += self.period;
        }
    }
}
