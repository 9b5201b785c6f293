//! Browser timer source for [`Debouncer`](crate::core::debounce::Debouncer).

use crate::core::debounce::Scheduler;
use gloo_timers::callback::Timeout;

/// Schedules tasks with `setTimeout`; dropping the handle clears the timer.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn detach(&self, handle: Timeout) {
        handle.forget();
    }
}
