use super::{Clock, SystemClock, TimeMeter};
use std::time::Duration;
use tracing::debug;

/// A timeout that is polled with [TimeEvent::check].
///
/// After [TimeEvent::start] the event is expected. Once more than the waiting time has elapsed,
/// the next [TimeEvent::check] marks it as occurred (and no longer expected).
#[derive(Clone, Debug)]
pub struct TimeEvent<C: Clock = SystemClock> {
    meter: TimeMeter<C>,
    waiting: Duration,
    expected: bool,
    occurred: bool,
}

impl TimeEvent<SystemClock> {
    /// Create an idle event on the system clock.
    pub fn new(waiting: Duration) -> Self {
        Self::with_clock(waiting, SystemClock)
    }
}

impl<C: Clock> TimeEvent<C> {
    /// Create an idle event on `clock`.
    pub fn with_clock(waiting: Duration, clock: C) -> Self {
        Self {
            meter: TimeMeter::with_clock(clock),
            waiting,
            expected: false,
            occurred: false,
        }
    }

    /// Begin waiting for the event.
    pub fn start(&mut self) {
        self.expected = true;
        self.occurred = false;
        self.meter.start();
    }

    /// Restart the waiting period without changing the event's state.
    pub fn restart_time(&mut self) {
        self.meter.start();
    }

    /// Change the waiting time. Takes effect at the next [TimeEvent::check].
    pub fn set_waiting_time(&mut self, waiting: Duration) {
        self.waiting = waiting;
    }

    /// Returns the waiting time.
    pub fn waiting_time(&self) -> Duration {
        self.waiting
    }

    /// Stop waiting. The event is neither expected nor occurred afterwards.
    pub fn stop(&mut self) {
        self.expected = false;
        self.occurred = false;
        self.meter.stop();
    }

    /// Poll the event and return whether it has occurred.
    pub fn check(&mut self) -> bool {
        if self.expected && self.meter.elapsed() > self.waiting {
            self.expected = false;
            self.occurred = true;
            debug!(waiting = ?self.waiting, "time event occurred");
        }
        self.occurred
    }

    /// Returns true if the event is being waited for.
    pub fn is_expected(&self) -> bool {
        self.expected
    }

    /// Returns true if the event has occurred.
    pub fn is_occurred(&self) -> bool {
        self.occurred
    }

    /// Returns the meter measuring the waiting period.
    pub fn meter(&self) -> &TimeMeter<C> {
        &self.meter
    }
}
