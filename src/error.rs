//! Error types for game construction.
//!
//! Only construction can fail. Input handling (`Game::pick`) either succeeds,
//! is a defined no-op, or panics on a contract violation.

use thiserror::Error;

/// Errors raised while building a deck or a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The pool has fewer distinct contents than the deck needs pairs.
    #[error("insufficient vocabulary: need {requested_pairs} distinct contents, pool has {available}")]
    InsufficientVocabulary {
        /// Pairs the deck requires (`tile_count / 2`).
        requested_pairs: usize,
        /// Distinct content texts in the pool.
        available: usize,
    },

    /// Tile counts must be even so every tile has a partner.
    #[error("tile count must be even, got {0}")]
    OddTileCount(usize),

    /// A deck needs at least one pair.
    #[error("tile count must be at least 2")]
    EmptyDeck,
}

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InsufficientVocabulary {
            requested_pairs: 4,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "insufficient vocabulary: need 4 distinct contents, pool has 3"
        );
        assert_eq!(Error::OddTileCount(7).to_string(), "tile count must be even, got 7");
        assert_eq!(Error::EmptyDeck.to_string(), "tile count must be at least 2");
    }
}
