//! Game state machine, phases, and events.
//!
//! ## Key Types
//!
//! - `Game`: Owns the deck; `pick` is its only input
//! - `Phase`: `Idle`, `AwaitingPartner`, `ResolvingMismatch`, `Won`
//! - `PickOutcome`: Which transition a pick took
//! - `GameEvent`: Per-mutation record for renderers

mod event;
mod phase;
mod state;

pub use event::GameEvent;
pub use phase::{IgnoreReason, Phase, PickOutcome};
pub use state::Game;
