//! Instance-owned timer handle.
//!
//! Scheduling replaces any pending callback, which is what debouncing needs;
//! dropping the handle cancels whatever is pending, which is what teardown
//! needs.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use gloo_timers::callback::Timeout;

/// At most one pending browser timeout.
#[derive(Default)]
pub struct Debouncer {
    pending: Option<Timeout>,
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer").field("pending", &self.pending.is_some()).finish()
    }
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` after `delay_ms`, cancelling any callback still pending.
    pub fn schedule<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    /// Cancel the pending callback, if any.
    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            drop(timeout.cancel());
        }
    }
}
