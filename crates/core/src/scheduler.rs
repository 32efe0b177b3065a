//! Scheduler module - virtual-time timers with cancellable handles
//!
//! The scheduler keeps its own millisecond clock that only moves when the
//! owner advances it, so timing is deterministic and testable. Every
//! scheduled timer returns a [`TimerHandle`]; cancelling the handle removes
//! the timer, so a cancelled callback can never fire later.

/// Handle to a scheduled timer.
///
/// Handles are never reused within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    handle: TimerHandle,
    due_ms: u64,
    /// `Some` for repeating timers
    period_ms: Option<u64>,
    event: E,
}

/// Timer queue over a virtual clock
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E: Copy> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Fire `event` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u32, event: E) -> TimerHandle {
        self.push(delay_ms as u64, None, event)
    }

    /// Fire `event` every `period_ms`, first one period from now.
    pub fn schedule_repeating(&mut self, period_ms: u32, event: E) -> TimerHandle {
        assert!(period_ms > 0, "repeating timer period must be non-zero");
        self.push(period_ms as u64, Some(period_ms as u64), event)
    }

    fn push(&mut self, delay_ms: u64, period_ms: Option<u64>, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            due_ms: self.now_ms + delay_ms,
            period_ms,
            event,
        });
        handle
    }

    /// Cancel a timer. Returns false if it already fired (one-shot) or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Pop the earliest timer due at or before `until_ms`.
    ///
    /// The clock jumps to the timer's due time before it is returned, so
    /// timers scheduled by the caller while handling it are relative to the
    /// moment it fired. Ties fire in scheduling order. Repeating timers are
    /// re-armed one period later.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerHandle, E)> {
        let (pos, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due_ms <= until_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.handle))?;

        let entry = &mut self.entries[pos];
        self.now_ms = self.now_ms.max(entry.due_ms);
        let fired = (entry.handle, entry.event);

        match entry.period_ms {
            Some(period) => entry.due_ms += period,
            None => {
                self.entries.swap_remove(pos);
            }
        }

        Some(fired)
    }

    /// Move the clock forward without firing anything.
    ///
    /// Call after draining [`Self::pop_due`] up to the same instant.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

impl<E: Copy> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Ev {
        A,
        B,
    }

    fn drain(s: &mut Scheduler<Ev>, until: u64) -> Vec<(u64, Ev)> {
        let mut out = Vec::new();
        while let Some((_, ev)) = s.pop_due(until) {
            out.push((s.now_ms(), ev));
        }
        s.advance_to(until);
        out
    }

    #[test]
    fn test_one_shot_fires_once_at_due_time() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(1000, Ev::A);

        assert!(drain(&mut s, 999).is_empty());
        assert!(s.is_pending(h));
        assert_eq!(drain(&mut s, 1000), vec![(1000, Ev::A)]);
        assert!(!s.is_pending(h));
        assert!(drain(&mut s, 5000).is_empty());
    }

    #[test]
    fn test_repeating_fires_every_period() {
        let mut s = Scheduler::new();
        s.schedule_repeating(1000, Ev::A);

        let fired = drain(&mut s, 3500);
        assert_eq!(fired, vec![(1000, Ev::A), (2000, Ev::A), (3000, Ev::A)]);
        assert_eq!(s.now_ms(), 3500);
        assert_eq!(drain(&mut s, 4000), vec![(4000, Ev::A)]);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(1000, Ev::A);
        assert!(s.cancel(h));
        assert!(!s.cancel(h));
        assert!(drain(&mut s, 10_000).is_empty());
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule_once(500, Ev::B);
        s.schedule_once(500, Ev::A);
        assert_eq!(drain(&mut s, 500), vec![(500, Ev::B), (500, Ev::A)]);
    }

    #[test]
    fn test_schedule_is_relative_to_current_time() {
        let mut s = Scheduler::new();
        s.advance_to(250);
        s.schedule_once(1000, Ev::A);
        assert!(drain(&mut s, 1000).is_empty());
        assert_eq!(drain(&mut s, 1250), vec![(1250, Ev::A)]);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut s = Scheduler::new();
        let a = s.schedule_once(1, Ev::A);
        s.cancel(a);
        let b = s.schedule_once(1, Ev::A);
        assert_ne!(a, b);
    }
}
