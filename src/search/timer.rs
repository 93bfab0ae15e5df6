//! Clocks and deferred actions
//!
//! Blurring the query input hides the dropdown, but a pointer selection on a
//! dropdown entry also blurs the input. Dismissal is therefore deferred by a
//! short grace period, and a commit that lands inside that window cancels it.
//!
//! Time is read through the [`Clock`] trait so tests can drive it manually.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Default grace period between blur and dismissal
pub const DEFAULT_BLUR_GRACE: Duration = Duration::from_millis(150);

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
///
/// # Examples
///
/// ```
/// use menufind::search::timer::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(200));
/// assert_eq!(clock.now() - start, Duration::from_millis(200));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    /// Move time forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// A single cancelable action scheduled after a fixed delay
#[derive(Debug, Clone)]
pub struct Deferred {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Deferred {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule the action at `now + delay`, replacing any pending one
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancel the pending action; returns whether one was pending
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Consume the pending action if its deadline has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Deferred {
    fn default() -> Self {
        Self::new(DEFAULT_BLUR_GRACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_delay() {
        let clock = ManualClock::new();
        let mut deferred = Deferred::new(Duration::from_millis(150));
        deferred.schedule(clock.now());

        clock.advance(Duration::from_millis(149));
        assert!(!deferred.fire_if_due(clock.now()));
        assert!(deferred.is_pending());

        clock.advance(Duration::from_millis(1));
        assert!(deferred.fire_if_due(clock.now()));
        assert!(!deferred.is_pending());
        assert!(!deferred.fire_if_due(clock.now()));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let clock = ManualClock::new();
        let mut deferred = Deferred::default();
        deferred.schedule(clock.now());

        assert!(deferred.cancel());
        assert!(!deferred.cancel());

        clock.advance(Duration::from_secs(1));
        assert!(!deferred.fire_if_due(clock.now()));
    }

    #[test]
    fn test_reschedule_pushes_deadline() {
        let clock = ManualClock::new();
        let mut deferred = Deferred::new(Duration::from_millis(100));
        deferred.schedule(clock.now());

        clock.advance(Duration::from_millis(80));
        deferred.schedule(clock.now());

        clock.advance(Duration::from_millis(80));
        assert!(!deferred.fire_if_due(clock.now()));

        clock.advance(Duration::from_millis(20));
        assert!(deferred.fire_if_due(clock.now()));
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = ManualClock::new();
        let by_ref: &ManualClock = &clock;
        let before = Clock::now(&by_ref);
        clock.advance(Duration::from_millis(5));
        assert_eq!(Clock::now(&by_ref) - before, Duration::from_millis(5));
    }
}
