//! Fixed-rate frame pacing for the native loop

use std::thread;
use std::time::{Duration, Instant};

/// Sleeps the caller so ticks land on a fixed period
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until the next tick is due. Returns true if the clock had
    /// fallen more than a period behind and was resynchronized.
    pub fn wait(&mut self) -> bool {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.period;
            return false;
        }
        if now - self.next > self.period {
            // Too far behind: skip ahead instead of running a burst of ticks
            log::debug!("Frame clock behind by {:?}, resyncing", now - self.next);
            self.next = now + self.period;
            return true;
        }
        self.next += self.period;
        false
    }
}
