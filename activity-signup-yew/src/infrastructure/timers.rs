use activity_signup_core::Scheduler;
use gloo_timers::callback::Timeout;
use std::time::Duration;

/// Longest delay `setTimeout` honours; larger values fire immediately
const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

/// [`Scheduler`] backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        // Fire-and-forget: the timer outlives this call
        Timeout::new(timeout_millis(delay), task).forget();
    }
}

fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis())
        .unwrap_or(MAX_TIMEOUT_MS)
        .min(MAX_TIMEOUT_MS)
}
