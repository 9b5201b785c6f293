//! Test doubles shared by the core unit tests.

use crate::core::debounce::Scheduler;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    tasks: Vec<(u64, u64, Task)>,
}

/// Virtual clock that only moves when a test advances it.
#[derive(Clone, Default)]
pub(crate) struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

/// Timer handle; dropping it cancels the task unless it was detached.
pub(crate) struct ManualHandle {
    id: u64,
    state: Weak<RefCell<ClockState>>,
    armed: bool,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().tasks.retain(|(_, id, _)| *id != self.id);
        }
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + u64::from(delay_ms);
        state.tasks.push((due, id, task));
        ManualHandle {
            id,
            state: Rc::downgrade(&self.state),
            armed: true,
        }
    }

    fn detach(&self, mut handle: ManualHandle) {
        handle.armed = false;
    }
}

impl ManualClock {
    /// Move time forward, running due tasks in order.
    pub(crate) fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        loop {
            let task = {
                let mut state = self.state.borrow_mut();
                let next = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, id, _))| (*due, *id))
                    .map(|(index, _)| index);
                if let Some(index) = next {
                    let (due, _, task) = state.tasks.remove(index);
                    state.now = due;
                    task
                } else {
                    state.now = target;
                    break;
                }
            };
            task();
        }
    }

    /// Number of armed tasks.
    pub(crate) fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }
}
