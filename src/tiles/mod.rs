//! Tile system: faces, tiles, and the vocabularies faces are drawn from.
//!
//! ## Key Types
//!
//! - `Content`: Display text and optional color; text alone decides pairing
//! - `Tile`: A board piece with its partner id and visibility
//! - `Vocabulary`: Closed set of content pools

pub mod content;
pub mod tile;
pub mod vocabulary;

pub use content::{Color, Content};
pub use tile::Tile;
pub use vocabulary::Vocabulary;
