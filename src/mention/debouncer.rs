//! Debounce timer for search dispatch.
//!
//! At most one search is scheduled at a time; rescheduling replaces the
//! previous one, so a burst of keystrokes collapses into a single search
//! using the last term. The deadline is polled from the event loop rather
//! than driven by a timer thread.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    term: String,
    deadline: Instant,
}

impl Debouncer {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_period: Duration::from_millis(quiet_ms),
            pending: None,
        }
    }

    /// Schedule a search for `term`, replacing any pending one.
    pub fn schedule(&mut self, term: impl Into<String>) {
        self.schedule_at(term, Instant::now());
    }

    pub fn schedule_at(&mut self, term: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            term: term.into(),
            deadline: now + self.quiet_period,
        });
    }

    /// Drop the pending search without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the scheduled term if its quiet period has elapsed.
    pub fn take_due(&mut self) -> Option<String> {
        self.take_due_at(Instant::now())
    }

    pub fn take_due_at(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.pending.take().map(|p| p.term)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
