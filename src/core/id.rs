//! Tile identification.
//!
//! A `TileId` is the tile's index in its deck. The deck owns every tile;
//! partners, phases, and events refer to tiles only by id.
//!
//! ```
//! use memory_match::core::TileId;
//!
//! let id = TileId::new(3);
//! assert_eq!(id.index(), 3);
//! assert_eq!(format!("{}", id), "Tile(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a tile within one deck.
///
/// Ids are only meaningful for the deck that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this tile in its deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}
