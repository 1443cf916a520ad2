//! Measure elapsed time against a monotonic clock.
//!
//! [TimeMeter] measures the time since it was started. [TimeEvent] turns a meter into a
//! timeout that can be polled. Both are generic over a [Clock] so tests can drive time with
//! [ManualClock] instead of sleeping.

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

mod event;
pub use event::TimeEvent;

/// Source of monotonic instants.
pub trait Clock: Clone + Send + Sync + 'static {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The operating system's monotonic clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when advanced. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move the clock forward by `duration`.
    ///
    /// Saturates at the latest instant the platform can represent.
    pub fn advance(&self, duration: Duration) {
        let mut offset = self.offset.lock().unwrap();
        let mut remaining = duration;
        let mut step = duration;
        while !remaining.is_zero() && !step.is_zero() {
            step = step.min(remaining);
            let next = offset
                .checked_add(step)
                .filter(|next| self.base.checked_add(*next).is_some());
            match next {
                Some(next) => {
                    *offset = next;
                    remaining -= step;
                }
                None => step /= 2,
            }
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        // `advance` keeps `base + offset` representable
        self.base + *self.offset.lock().unwrap()
    }
}

/// Measures the time elapsed since [TimeMeter::start].
///
/// A meter that was never started (or was stopped) reports zero elapsed time.
#[derive(Clone, Debug)]
pub struct TimeMeter<C: Clock = SystemClock> {
    clock: C,
    start: Option<Instant>,
}

impl TimeMeter<SystemClock> {
    /// Create an inactive meter on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a meter on the system clock that is already running.
    pub fn started() -> Self {
        let mut meter = Self::new();
        meter.start();
        meter
    }
}

impl Default for TimeMeter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimeMeter<C> {
    /// Create an inactive meter on `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock, start: None }
    }

    /// Start (or restart) measuring.
    pub fn start(&mut self) {
        self.start = Some(self.clock.now());
    }

    /// Start measuring again and return the time elapsed before the restart.
    pub fn restart(&mut self) -> Duration {
        let elapsed = self.elapsed();
        self.start();
        elapsed
    }

    /// Stop measuring.
    pub fn stop(&mut self) {
        self.start = None;
    }

    /// Returns true if the meter is measuring.
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Time elapsed since the meter was started.
    pub fn elapsed(&self) -> Duration {
        match self.start {
            Some(start) => self.clock.now().saturating_duration_since(start),
            None => Duration::ZERO,
        }
    }

    /// Elapsed seconds.
    pub fn secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Elapsed whole seconds.
    pub fn secs_whole(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// Elapsed milliseconds.
    pub fn msecs(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1e3
    }

    /// Elapsed whole milliseconds.
    pub fn msecs_whole(&self) -> u128 {
        self.elapsed().as_millis()
    }

    /// Elapsed microseconds.
    pub fn usecs(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1e6
    }

    /// Elapsed whole microseconds.
    pub fn usecs_whole(&self) -> u128 {
        self.elapsed().as_micros()
    }

    /// Elapsed nanoseconds.
    pub fn nsecs(&self) -> u128 {
        self.elapsed().as_nanos()
    }
}
