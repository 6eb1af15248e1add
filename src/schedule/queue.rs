//! Virtual-clock timer queue.

use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;

use super::{Scheduler, TimerEvent, TimerToken};

/// Ordered timer queue driven by explicit time advancement.
///
/// Entries are keyed by `(due, token)`; tokens increase monotonically, so
/// equal due times fire in scheduling order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    entries: BTreeMap<(Duration, TimerToken), TimerEvent>,
    due_at: FxHashMap<TimerToken, Duration>,
    next_token: u64,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.keys().next().map(|&(due, _)| due)
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;

        let due = self.now.saturating_add(delay);
        self.entries.insert((due, token), event);
        self.due_at.insert(token, due);
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        match self.due_at.remove(&token) {
            Some(due) => self.entries.remove(&(due, token)).is_some(),
            None => false,
        }
    }

    fn due_at(&self, token: TimerToken) -> Option<Duration> {
        self.due_at.get(&token).copied()
    }

    fn pop_due(&mut self, deadline: Duration) -> Option<(TimerToken, TimerEvent)> {
        let (&(due, token), _) = self.entries.first_key_value()?;
        if due > deadline {
            return None;
        }

        let event = self.entries.remove(&(due, token))?;
        self.due_at.remove(&token);
        self.now = self.now.max(due);
        Some((token, event))
    }

    fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    fn pending(&self) -> usize {
        self.entries.len()
    }
}
