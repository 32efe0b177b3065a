//! Wall-clock pacing for the session's virtual timers.

use std::time::{Duration, Instant};

/// Turns real elapsed time into whole milliseconds for `GameSession::advance`.
///
/// The baseline only moves by the milliseconds actually credited, so the
/// sub-millisecond remainder carries into the next call and the total never
/// falls behind wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Time left until `period` has passed since the last credited instant.
    pub fn until_next(&self, period: Duration, now: Instant) -> Duration {
        period.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Whole milliseconds since the last call.
    pub fn take_elapsed_ms(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        self.last += Duration::from_millis(ms as u64);
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn test_late_tick_credits_full_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);

        let now = start + Duration::from_millis(20);
        assert!(clock.until_next(TICK, now).is_zero());
        assert_eq!(clock.take_elapsed_ms(now), 20);
        assert_eq!(clock.until_next(TICK, now), TICK);
    }

    #[test]
    fn test_sub_millisecond_remainder_carries_over() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        let frame = Duration::from_micros(16_600);

        let total: u32 = (1..=60)
            .map(|i| clock.take_elapsed_ms(start + frame * i))
            .sum();
        assert_eq!(total, 996);
    }

    #[test]
    fn test_stall_is_credited_in_one_step() {
        let start = Instant::now();
        let mut clock = FrameClock::new(start);
        assert_eq!(clock.take_elapsed_ms(start + Duration::from_secs(5)), 5000);
        assert_eq!(clock.take_elapsed_ms(start + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_until_next_counts_down() {
        let start = Instant::now();
        let clock = FrameClock::new(start);
        assert_eq!(clock.until_next(TICK, start), TICK);
        assert_eq!(
            clock.until_next(TICK, start + Duration::from_millis(10)),
            Duration::from_millis(6)
        );
    }
}
