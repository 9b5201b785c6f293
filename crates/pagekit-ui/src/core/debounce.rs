//! Trailing-edge debouncer over a pluggable timer source.
//!
//! # Design
//! - One pending slot per debouncer; a new call drops the previous handle, which cancels it.
//! - The timer source is a trait so the browser uses `gloo` timeouts and tests use a manual clock.

use std::cell::RefCell;
use yew::Callback;

/// Source of one-shot timers whose handles cancel the timer when dropped.
pub trait Scheduler {
    /// Handle that keeps the timer armed while alive.
    type Handle;

    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Let the timer fire without keeping its handle alive.
    fn detach(&self, handle: Self::Handle);
}

/// Delays a callback until calls stop arriving for `wait_ms`, keeping the latest value.
pub struct Debouncer<T: 'static, S: Scheduler> {
    wait_ms: u32,
    scheduler: S,
    target: Callback<T>,
    pending: RefCell<Option<S::Handle>>,
}

impl<T: 'static, S: Scheduler> Debouncer<T, S> {
    /// Wrap `target` so it fires `wait_ms` after the most recent [`Debouncer::call`].
    pub const fn new(scheduler: S, wait_ms: u32, target: Callback<T>) -> Self {
        Self {
            wait_ms,
            scheduler,
            target,
            pending: RefCell::new(None),
        }
    }

    /// Replace any pending call with one carrying `value`.
    pub fn call(&self, value: T) {
        let stale = self.pending.borrow_mut().take();
        drop(stale);
        let target = self.target.clone();
        let handle = self
            .scheduler
            .schedule(self.wait_ms, Box::new(move || target.emit(value)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        let stale = self.pending.borrow_mut().take();
        drop(stale);
    }

    /// Quiet period in milliseconds.
    #[must_use]
    pub const fn wait_ms(&self) -> u32 {
        self.wait_ms
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use crate::core::testing::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Callback;

    fn recording() -> (Rc<RefCell<Vec<u32>>>, Callback<u32>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, Callback::from(move |value| sink.borrow_mut().push(value)))
    }

    #[test]
    fn bursts_collapse_to_last_value() {
        let clock = ManualClock::default();
        let (seen, target) = recording();
        let debouncer = Debouncer::new(clock.clone(), 100, target);

        debouncer.call(1);
        clock.advance(50);
        debouncer.call(2);
        clock.advance(50);
        debouncer.call(3);
        clock.advance(99);
        assert!(seen.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*seen.borrow(), vec![3]);
        clock.advance(1_000);
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn quiet_periods_let_each_call_through() {
        let clock = ManualClock::default();
        let (seen, target) = recording();
        let debouncer = Debouncer::new(clock.clone(), 20, target);

        debouncer.call(1);
        clock.advance(25);
        debouncer.call(2);
        clock.advance(25);
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn only_one_timer_is_ever_pending() {
        let clock = ManualClock::default();
        let (_seen, target) = recording();
        let debouncer = Debouncer::new(clock.clone(), 100, target);
        for value in 0..5 {
            debouncer.call(value);
        }
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn cancel_drops_pending_call() {
        let clock = ManualClock::default();
        let (seen, target) = recording();
        let debouncer = Debouncer::new(clock.clone(), 10, target);
        debouncer.call(7);
        debouncer.cancel();
        clock.advance(100);
        assert!(seen.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn instances_do_not_share_slots() {
        let clock = ManualClock::default();
        let (seen, target) = recording();
        let first = Debouncer::new(clock.clone(), 10, target.clone());
        let second = Debouncer::new(clock.clone(), 10, target);
        first.call(1);
        second.call(2);
        clock.advance(10);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(second.wait_ms(), 10);
    }
}
