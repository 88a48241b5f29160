//! Fixed-window call counter.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the rate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitState {
    /// Calls left in the current window; always within `0..=limit`.
    pub remaining: u32,
    /// When the current window ends.
    pub reset_at: DateTime<Utc>,
    /// Window capacity.
    pub limit: u32,
}

/// Source of the current time for the rate limiter.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now = shift(*now, to_delta(by));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Counts calls per fixed window.
///
/// The window is refilled to full capacity only once the current time has
/// passed `reset_at`; there is no partial refill.
pub struct RateLimiter {
    state: RateLimitState,
    window: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Create a limiter on the system clock.
    pub fn new(limit: u32, window: Duration) -> Self {
        Self::with_clock(limit, window, Arc::new(SystemClock))
    }

    /// Create a limiter on a custom clock. The first window starts now.
    pub fn with_clock(limit: u32, window: Duration, clock: Arc<dyn Clock>) -> Self {
        let window = to_delta(window);
        let state = RateLimitState {
            remaining: limit,
            reset_at: shift(clock.now(), window),
            limit,
        };
        Self {
            state,
            window,
            clock,
        }
    }

    /// Take one unit of capacity. Returns `false` when the window is exhausted.
    pub fn try_acquire(&mut self) -> bool {
        self.refresh();
        if self.state.remaining == 0 {
            return false;
        }
        self.state.remaining -= 1;
        true
    }

    /// Current state as seen now. An expired window reads as full without
    /// being stored.
    pub fn snapshot(&self) -> RateLimitState {
        let now = self.clock.now();
        if now > self.state.reset_at {
            self.fresh_window(now)
        } else {
            self.state
        }
    }

    /// State as last recorded, without consulting the clock.
    pub fn state(&self) -> RateLimitState {
        self.state
    }

    fn refresh(&mut self) {
        let now = self.clock.now();
        if now > self.state.reset_at {
            self.state = self.fresh_window(now);
        }
    }

    fn fresh_window(&self, now: DateTime<Utc>) -> RateLimitState {
        RateLimitState {
            remaining: self.state.limit,
            reset_at: shift(now, self.window),
            limit: self.state.limit,
        }
    }
}

fn to_delta(duration: Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX)
}

fn shift(at: DateTime<Utc>, by: TimeDelta) -> DateTime<Utc> {
    at.checked_add_signed(by).unwrap_or(DateTime::<Utc>::MAX_UTC)
}
