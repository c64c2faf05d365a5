use std::cell::RefCell;
use std::rc::Rc;

use super::MonotonicClock;

/// Identifies one armed timer. Never reused within a queue.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimerHandle(u64);

/// Caller-chosen tag carried by a timer (what the timer is for).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct TimerToken(pub u32);

/// A timer whose deadline has passed, as returned by [`TimerQueue::take_due`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DueTimer {
    pub handle: TimerHandle,
    pub token: TimerToken,
    pub deadline_ms: u64,
}

/// One-shot, cancellable scheduling primitive.
///
/// Scheduling never blocks and never runs anything by itself: the owning loop
/// collects due timers and hands each one back to whoever armed it.
pub trait Scheduler {
    /// Arms a one-shot timer firing `delay_ms` from now.
    fn schedule_after(&self, delay_ms: u64, token: TimerToken) -> TimerHandle;

    /// Disarms `handle`. Returns `false` if it already fired or was cancelled.
    fn cancel(&self, handle: TimerHandle) -> bool;
}

#[derive(Debug)]
struct Entry {
    handle: TimerHandle,
    token: TimerToken,
    deadline_ms: u64,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    pending: Vec<Entry>,
}

/// Single-threaded timer queue driven by a [`MonotonicClock`].
///
/// Shared by reference count between the loop and the timer owners; all
/// mutation goes through a `RefCell`, so it must stay on one thread.
pub struct TimerQueue {
    clock: Rc<dyn MonotonicClock>,
    inner: RefCell<Inner>,
}

impl TimerQueue {
    pub fn new(clock: Rc<dyn MonotonicClock>) -> Self {
        Self { clock, inner: RefCell::new(Inner::default()) }
    }

    /// The clock deadlines are measured against.
    pub fn clock(&self) -> &Rc<dyn MonotonicClock> {
        &self.clock
    }

    /// Number of armed timers.
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.inner.borrow().pending.iter().any(|e| e.handle == handle)
    }

    /// Earliest deadline among armed timers.
    pub fn next_deadline(&self) -> Option<u64> {
        self.inner.borrow().pending.iter().map(|e| e.deadline_ms).min()
    }

    /// Removes and returns every timer with `deadline <= now_ms`.
    ///
    /// Ordered by deadline, then by the order the timers were armed.
    pub fn take_due(&self, now_ms: u64) -> Vec<DueTimer> {
        let mut inner = self.inner.borrow_mut();
        let mut due: Vec<DueTimer> = Vec::new();
        inner.pending.retain(|e| {
            if e.deadline_ms <= now_ms {
                due.push(DueTimer { handle: e.handle, token: e.token, deadline_ms: e.deadline_ms });
                false
            } else {
                true
            }
        });
        due.sort_by_key(|d| (d.deadline_ms, d.handle));
        due
    }
}

impl Scheduler for TimerQueue {
    fn schedule_after(&self, delay_ms: u64, token: TimerToken) -> TimerHandle {
        let deadline_ms = self.clock.now_ms().saturating_add(delay_ms);
        let mut inner = self.inner.borrow_mut();
        let handle = TimerHandle(inner.next_id);
        inner.next_id += 1;
        inner.pending.push(Entry { handle, token, deadline_ms });
        log::trace!("armed {handle:?} ({token:?}) for t={deadline_ms}ms");
        handle
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.pending.len();
        inner.pending.retain(|e| e.handle != handle);
        let removed = inner.pending.len() != before;
        if removed {
            log::trace!("cancelled {handle:?}");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn queue() -> (Rc<ManualClock>, TimerQueue) {
        let clock = Rc::new(ManualClock::new(0));
        let q = TimerQueue::new(clock.clone());
        (clock, q)
    }

    // ── scheduling ────────────────────────────────────────────────────────

    #[test]
    fn timer_fires_only_after_its_delay() {
        let (clock, q) = queue();
        let h = q.schedule_after(1_000, TimerToken(2));
        assert!(q.take_due(clock.now_ms()).is_empty());

        clock.advance(999);
        assert!(q.take_due(clock.now_ms()).is_empty());

        clock.advance(1);
        let due = q.take_due(clock.now_ms());
        assert_eq!(due, vec![DueTimer { handle: h, token: TimerToken(2), deadline_ms: 1_000 }]);
        assert_eq!(q.pending_count(), 0);
    }

    #[test]
    fn due_timers_come_back_in_deadline_order() {
        let (clock, q) = queue();
        let late = q.schedule_after(300, TimerToken(0));
        let early = q.schedule_after(100, TimerToken(0));
        let tie = q.schedule_after(100, TimerToken(1));
        clock.advance(500);
        let order: Vec<_> = q.take_due(clock.now_ms()).into_iter().map(|d| d.handle).collect();
        assert_eq!(order, vec![early, tie, late]);
    }

    #[test]
    fn next_deadline_tracks_earliest() {
        let (clock, q) = queue();
        assert_eq!(q.next_deadline(), None);
        clock.advance(50);
        q.schedule_after(1_000, TimerToken(0));
        q.schedule_after(200, TimerToken(0));
        assert_eq!(q.next_deadline(), Some(250));
    }

    // ── cancellation ──────────────────────────────────────────────────────

    #[test]
    fn cancel_removes_only_that_handle() {
        let (clock, q) = queue();
        let mine = q.schedule_after(1_000, TimerToken(2));
        let theirs = q.schedule_after(1_000, TimerToken(2));

        assert!(q.cancel(mine));
        assert!(!q.is_pending(mine));
        assert!(q.is_pending(theirs));

        clock.advance(1_000);
        let due = q.take_due(clock.now_ms());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].handle, theirs);
    }

    #[test]
    fn cancel_after_fire_reports_false() {
        let (clock, q) = queue();
        let h = q.schedule_after(10, TimerToken(0));
        clock.advance(10);
        let _ = q.take_due(clock.now_ms());
        assert!(!q.cancel(h));
    }

    #[test]
    fn handles_are_never_reused() {
        let (_clock, q) = queue();
        let a = q.schedule_after(10, TimerToken(0));
        q.cancel(a);
        let b = q.schedule_after(10, TimerToken(0));
        assert_ne!(a, b);
    }
}
