//! # memory-match
//!
//! Engine for a memory-matching puzzle: a deck of paired tiles starts
//! face-down, the player reveals two at a time, pairs stay up, mismatches
//! flip back after a short delay, and the puzzle ends when every pair is
//! found.
//!
//! ## Design Principles
//!
//! 1. **Deck owns everything**: Tiles refer to their partner by `TileId`,
//!    never by reference. Phases and events carry ids too.
//!
//! 2. **One input**: `Game::pick` is the only external mutation. Every
//!    would-be invalid pick is a defined no-op, except a tile from another
//!    deck, which panics.
//!
//! 3. **Explicit time**: Delayed transitions go through a `Scheduler` and
//!    fire only when the host calls `Game::advance`, on the same thread as
//!    `pick`. Dropping a game cancels its timers.
//!
//! 4. **Deterministic**: All randomness flows through a seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Tile ids, RNG, difficulty and timing configuration
//! - `tiles`: Content, colors, tiles, vocabularies
//! - `deck`: Deck ownership, validation and generation
//! - `schedule`: Timer trait and virtual-clock queue
//! - `game`: The pick/match state machine
//! - `error`: Construction errors

pub mod core;
pub mod deck;
pub mod error;
pub mod game;
pub mod schedule;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{Difficulty, GameConfig, GameRng, TileId, TimingConfig};

pub use crate::tiles::{Color, Content, Tile, Vocabulary};

pub use crate::deck::{generate, Deck, DeckDefect};

pub use crate::schedule::{Scheduler, TimerEvent, TimerQueue, TimerToken};

pub use crate::game::{Game, GameEvent, IgnoreReason, Phase, PickOutcome};

pub use crate::error::{Error, Result};
