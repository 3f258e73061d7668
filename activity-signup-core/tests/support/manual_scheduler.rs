use activity_signup_core::Scheduler;
use std::cell::{Cell, RefCell};
use std::time::Duration;

type Task = Box<dyn FnOnce()>;

/// Scheduler driven by the test instead of a clock
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    pending: RefCell<Vec<(Duration, Task)>>,
}

impl ManualScheduler {
    /// Number of tasks that have not fired yet
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock forward, firing due tasks in due order
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;

        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let earliest = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= target)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(index, _)| index);
                earliest.map(|index| pending.remove(index))
            };

            match next {
                Some((due, task)) => {
                    self.now.set(due);
                    task();
                }
                None => break,
            }
        }

        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let due = self.now.get() + delay;
        self.pending.borrow_mut().push((due, task));
    }
}
