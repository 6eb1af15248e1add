//! Game events.
//!
//! Every mutation the engine makes is recorded as a `GameEvent`. A renderer
//! can either re-read the game after each `pick`/`advance`, or drain these
//! events to animate exactly what changed.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::core::TileId;

/// Something that happened to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile turned face-up.
    Revealed(TileId),

    /// A tile turned face-down.
    Hidden(TileId),

    /// A pair was found, in pick order.
    Matched(TileId, TileId),

    /// Two non-partners were picked, in pick order.
    Mismatched(TileId, TileId),

    /// The final pair was found. The win follows after the win delay.
    Solved,

    /// The phase changed.
    PhaseChanged { from: Phase, to: Phase },
}

impl GameEvent {
    /// The tiles this event concerns.
    #[must_use]
    pub fn tiles(&self) -> Vec<TileId> {
        match *self {
            GameEvent::Revealed(id) | GameEvent::Hidden(id) => vec![id],
            GameEvent::Matched(a, b) | GameEvent::Mismatched(a, b) => vec![a, b],
            GameEvent::Solved | GameEvent::PhaseChanged { .. } => Vec::new(),
        }
    }
}
