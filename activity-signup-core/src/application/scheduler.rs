use std::time::Duration;

/// Deferred work on the UI event loop
pub trait Scheduler {
    /// Run `task` once after `delay`. Not cancelable.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
