//! Cancellable repeating tasks.
//!
//! Components ask a [`Scheduler`] for a repeating task instead of creating
//! browser intervals directly, so tests can drive time by hand.

use gloo_timers::callback::Interval;

/// Handle to a repeating task. Dropping it cancels the task.
#[must_use = "the task is cancelled as soon as the handle is dropped"]
pub struct RepeatingTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl RepeatingTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler {
    /// Run `tick` every `period_ms` milliseconds until the task is dropped.
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> RepeatingTask;
}

/// `setInterval` via gloo.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn every(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> RepeatingTask {
        let interval = Interval::new(period_ms, move || tick());
        RepeatingTask::new(move || drop(interval))
    }
}
