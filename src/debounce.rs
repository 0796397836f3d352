use std::time::Duration;

/// Coalesces a burst of events into one action after a quiet period.
///
/// Times are offsets from an arbitrary epoch, typically egui's input clock,
/// so the same code runs natively and in the browser.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn set_quiet(&mut self, quiet: Duration) {
        self.quiet = quiet;
    }

    /// Records an event, pushing the pending deadline back.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.quiet);
    }

    /// Returns `true` exactly once after the quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending deadline, if any.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_sub(now))
    }
}
