//! Fixed-period tick source.
//!
//! The simulation advances in whole ticks. Wall-clock time is fed in from the
//! frame loop, accumulated, and converted to a count of due ticks; the
//! remainder carries over to the next frame.

use std::time::Duration;

use crate::error::{SimError, SimResult};

/// Accumulates elapsed time and reports how many ticks are due.
#[derive(Debug, Clone, PartialEq)]
pub struct TickClock {
    period: Duration,
    accumulated: Duration,
    max_catch_up: u32,
}

impl TickClock {
    /// Upper bound on ticks reported by a single `feed`, unless overridden.
    pub const DEFAULT_MAX_CATCH_UP: u32 = 50;

    /// Create a clock with the given tick period (must be non-zero).
    pub fn new(period: Duration) -> SimResult<Self> {
        if period.is_zero() {
            return Err(SimError::InvalidArg {
                what: "tick period must be positive",
            });
        }
        Ok(Self {
            period,
            accumulated: Duration::ZERO,
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
        })
    }

    /// Limit how many ticks one `feed` may report. Zero is treated as one.
    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    /// Time until the next tick is due.
    pub fn time_until_tick(&self) -> Duration {
        self.period.saturating_sub(self.accumulated)
    }

    /// Bank `elapsed` and return the number of ticks now due.
    ///
    /// When more than `max_catch_up` ticks are due the excess backlog is
    /// dropped, keeping only the sub-period remainder.
    pub fn feed(&mut self, elapsed: Duration) -> u32 {
        self.accumulated = self.accumulated.saturating_add(elapsed);

        let period_ns = self.period.as_nanos();
        let due = self.accumulated.as_nanos() / period_ns;
        let remainder_ns = self.accumulated.as_nanos() % period_ns;
        self.accumulated = Duration::from_nanos(remainder_ns as u64);

        if due > u128::from(self.max_catch_up) {
            tracing::debug!(
                due = due as u64,
                max = self.max_catch_up,
                "tick backlog dropped"
            );
            self.max_catch_up
        } else {
            due as u32
        }
    }

    /// Discard banked time.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twenty_ms() -> TickClock {
        TickClock::new(Duration::from_millis(20)).unwrap()
    }

    #[test]
    fn zero_period_is_rejected() {
        assert!(TickClock::new(Duration::ZERO).is_err());
    }

    #[test]
    fn remainder_carries_over() {
        let mut clock = twenty_ms();
        assert_eq!(clock.feed(Duration::from_millis(45)), 2);
        assert_eq!(clock.time_until_tick(), Duration::from_millis(15));
        assert_eq!(clock.feed(Duration::from_millis(15)), 1);
        assert_eq!(clock.time_until_tick(), Duration::from_millis(20));
    }

    #[test]
    fn short_frames_accumulate() {
        let mut clock = twenty_ms();
        assert_eq!(clock.feed(Duration::from_millis(8)), 0);
        assert_eq!(clock.feed(Duration::from_millis(8)), 0);
        assert_eq!(clock.feed(Duration::from_millis(8)), 1);
        assert_eq!(clock.time_until_tick(), Duration::from_millis(16));
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = twenty_ms().with_max_catch_up(5);
        assert_eq!(clock.feed(Duration::from_millis(1_010)), 5);
        assert_eq!(clock.time_until_tick(), Duration::from_millis(10));
    }

    #[test]
    fn reset_discards_pending() {
        let mut clock = twenty_ms();
        clock.feed(Duration::from_millis(13));
        clock.reset();
        assert_eq!(clock.time_until_tick(), Duration::from_millis(20));
    }
}
