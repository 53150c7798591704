use std::time::Duration;

use tokio::time::Instant;

/// Repeating autoplay schedule. Holds at most one pending deadline; every
/// (re)schedule replaces it.
#[derive(Debug, Clone)]
pub(crate) struct Autoplay {
    interval: Duration,
    deadline: Option<Instant>,
    hovered: bool,
}

impl Autoplay {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            hovered: false,
        }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(crate) fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub(crate) fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Cancel and schedule a full interval from `now`. A hovered carousel
    /// stays paused until the pointer leaves.
    pub(crate) fn restart(&mut self, now: Instant) {
        if self.hovered {
            return;
        }
        self.deadline = Some(now + self.interval);
    }

    pub(crate) fn pause(&mut self) {
        self.hovered = true;
        self.deadline = None;
    }

    pub(crate) fn resume(&mut self, now: Instant) {
        self.hovered = false;
        self.restart(now);
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Consumes a due deadline and arms the next one. Missed periods are
    /// skipped rather than replayed.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if deadline > now {
            return false;
        }
        let next = deadline + self.interval;
        self.deadline = Some(if next > now { next } else { now + self.interval });
        true
    }
}
