//! Phases and pick outcomes.

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Where the game is in its pick cycle. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No unresolved tile is face-up.
    #[default]
    Idle,

    /// One tile revealed, waiting for its partner.
    AwaitingPartner(TileId),

    /// A wrong second pick is on show. Input is locked until both tiles
    /// flip back.
    ResolvingMismatch { first: TileId, second: TileId },

    /// Every pair found. Terminal.
    Won,
}

impl Phase {
    /// Does this phase reject all picks?
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Phase::ResolvingMismatch { .. } | Phase::Won)
    }

    /// The tile waiting for a partner, if any.
    #[must_use]
    pub fn selected(self) -> Option<TileId> {
        match self {
            Phase::AwaitingPartner(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => f.write_str("Idle"),
            Phase::AwaitingPartner(id) => write!(f, "AwaitingPartner({id})"),
            Phase::ResolvingMismatch { first, second } => {
                write!(f, "ResolvingMismatch({first}, {second})")
            }
            Phase::Won => f.write_str("Won"),
        }
    }
}

/// Why a pick changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The tile is already part of a found pair.
    AlreadyMatched,
    /// The tile is the one already waiting for a partner.
    AlreadySelected,
    /// A mismatch is still being shown.
    Locked,
    /// The game is over.
    Finished,
}

/// Which transition a pick took.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickOutcome {
    /// First tile of a pair attempt turned face-up.
    Revealed,
    /// Second tile completed a pair.
    Matched,
    /// Second tile was wrong; both flip back after the mismatch window.
    Mismatched,
    /// Defined no-op.
    Ignored(IgnoreReason),
}

impl PickOutcome {
    /// Did the pick change any state?
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, PickOutcome::Ignored(_))
    }
}
