//! Core engine types: tile ids, RNG, configuration.

pub mod config;
pub mod id;
pub mod rng;

pub use config::{Difficulty, GameConfig, TimingConfig, UnknownName};
pub use id::TileId;
pub use rng::GameRng;
