//! Delayed, cancellable timers for mismatch and win resolution.
//!
//! The engine is single-threaded and pull-driven: `Game::pick` registers
//! timers and returns at once, and the host loop later calls
//! `Game::advance(elapsed)` on the same thread, which takes the game's own
//! due timers one at a time and applies them. Timers scheduled while
//! another fires are timed from that firing, so chained delays add up
//! exactly. Timers the game did not schedule stay in the queue.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::schedule::{Scheduler, TimerEvent, TimerQueue};
//!
//! let mut queue = TimerQueue::new();
//! let token = queue.schedule(Duration::from_millis(100), TimerEvent::DeclareWin);
//! assert_eq!(queue.pending(), 1);
//!
//! assert!(queue.pop_due(Duration::from_millis(50)).is_none());
//! assert_eq!(
//!     queue.pop_due(Duration::from_millis(100)),
//!     Some((token, TimerEvent::DeclareWin))
//! );
//! ```

mod queue;

pub use queue::TimerQueue;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Handle for cancelling a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Deferred game transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// First mismatch step: hide the tile picked second.
    HideSecondPick { first: TileId, second: TileId },

    /// Second mismatch step: hide the tile picked first and unlock input.
    HideFirstPick { first: TileId, second: TileId },

    /// All pairs found; enter the terminal phase.
    DeclareWin,
}

/// Timer provider.
///
/// Time is virtual: it moves only through `pop_due` and `advance_to`.
/// Implementations must return due timers ordered by due time, ties broken
/// by scheduling order.
pub trait Scheduler {
    /// Current virtual time.
    fn now(&self) -> Duration;

    /// Register `event` to fire `delay` after `now()`. A delay past the end
    /// of representable time saturates.
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerToken;

    /// Drop a pending timer. Returns false if it already fired or was
    /// cancelled.
    fn cancel(&mut self, token: TimerToken) -> bool;

    /// Due time of a pending timer, or `None` once it fired or was
    /// cancelled.
    fn due_at(&self, token: TimerToken) -> Option<Duration>;

    /// Remove and return the earliest timer due at or before `deadline`,
    /// moving `now()` to its due time.
    fn pop_due(&mut self, deadline: Duration) -> Option<(TimerToken, TimerEvent)>;

    /// Move `now()` forward to `deadline`. Never moves backwards.
    fn advance_to(&mut self, deadline: Duration);

    /// Number of timers waiting to fire.
    fn pending(&self) -> usize;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerToken {
        (**self).schedule(delay, event)
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        (**self).cancel(token)
    }

    fn due_at(&self, token: TimerToken) -> Option<Duration> {
        (**self).due_at(token)
    }

    fn pop_due(&mut self, deadline: Duration) -> Option<(TimerToken, TimerEvent)> {
        (**self).pop_due(deadline)
    }

    fn advance_to(&mut self, deadline: Duration) {
        (**self).advance_to(deadline)
    }

    fn pending(&self) -> usize {
        (**self).pending()
    }
}
