//! Decks: the sole owner of every tile in a session.
//!
//! ## Invariants
//!
//! For a deck of `n` tiles:
//! - `n` is even and non-zero
//! - tile `i` has id `TileId(i)`
//! - every text appears on exactly two tiles, which name each other as
//!   partner
//!
//! Composition is fixed after [`generate`] returns. Only tile visibility
//! changes afterwards, and only through `Game`.

mod generator;

pub use generator::generate;

use rustc_hash::FxHashMap;
use serde::Serialize;
use thiserror::Error;

use crate::core::TileId;
use crate::tiles::Tile;

/// A broken deck invariant, reported by [`Deck::validate`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckDefect {
    #[error("deck has odd or zero length {0}")]
    BadLength(usize),

    #[error("{tile} sits at index {index}")]
    Misplaced { tile: TileId, index: usize },

    #[error("{0} names a partner outside the deck")]
    DanglingPartner(TileId),

    #[error("{0} is its own partner")]
    SelfPartner(TileId),

    #[error("{a} and {b} are not mutual partners")]
    Asymmetric { a: TileId, b: TileId },

    #[error("{a} and {b} are partners with different text")]
    TextMismatch { a: TileId, b: TileId },

    #[error("text {text:?} appears on {count} tiles")]
    Repeated { text: String, count: usize },
}

/// The full ordered tile sequence for one session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    pub(crate) fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a generated deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Does `id` name a tile in this deck?
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        id.index() < self.tiles.len()
    }

    /// Look up a tile.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// The partner of `id`, if `id` is in the deck.
    #[must_use]
    pub fn partner(&self, id: TileId) -> Option<&Tile> {
        self.get(id).and_then(|tile| self.get(tile.partner()))
    }

    /// Tiles in board order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate tiles in board order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Ids of every face-up tile.
    pub fn visible(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().filter(|t| t.is_visible()).map(Tile::id)
    }

    pub(crate) fn set_visible(&mut self, id: TileId, visible: bool) {
        self.tiles[id.index()].set_visible(visible);
    }

    /// Check every deck invariant.
    pub fn validate(&self) -> Result<(), DeckDefect> {
        if self.tiles.is_empty() || self.tiles.len() % 2 != 0 {
            return Err(DeckDefect::BadLength(self.tiles.len()));
        }

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for (index, tile) in self.tiles.iter().enumerate() {
            if tile.id().index() != index {
                return Err(DeckDefect::Misplaced { tile: tile.id(), index });
            }
            if tile.partner() == tile.id() {
                return Err(DeckDefect::SelfPartner(tile.id()));
            }
            let partner = self
                .get(tile.partner())
                .ok_or(DeckDefect::DanglingPartner(tile.id()))?;
            if partner.partner() != tile.id() {
                return Err(DeckDefect::Asymmetric { a: tile.id(), b: partner.id() });
            }
            if partner.text() != tile.text() {
                return Err(DeckDefect::TextMismatch { a: tile.id(), b: partner.id() });
            }
            *counts.entry(tile.text()).or_default() += 1;
        }

        match counts.into_iter().find(|&(_, count)| count != 2) {
            Some((text, count)) => Err(DeckDefect::Repeated { text: text.to_string(), count }),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Content;

    fn tile(id: u32, text: &str, partner: u32) -> Tile {
        Tile::new(TileId(id), Content::new(text), TileId(partner))
    }

    #[test]
    fn test_valid_deck() {
        let deck = Deck::from_tiles(vec![tile(0, "A", 2), tile(1, "B", 3), tile(2, "A", 0), tile(3, "B", 1)]);

        assert_eq!(deck.validate(), Ok(()));
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pair_count(), 2);
        assert_eq!(deck.partner(TileId(1)).map(Tile::id), Some(TileId(3)));
        assert!(deck.contains(TileId(3)));
        assert!(!deck.contains(TileId(4)));
        assert!(deck.get(TileId(4)).is_none());
    }

    #[test]
    fn test_visible_tracking() {
        let mut deck = Deck::from_tiles(vec![tile(0, "A", 1), tile(1, "A", 0)]);
        assert_eq!(deck.visible().count(), 0);

        deck.set_visible(TileId(1), true);
        assert_eq!(deck.visible().collect::<Vec<_>>(), vec![TileId(1)]);
    }

    #[test]
    fn test_defects() {
        assert_eq!(Deck::from_tiles(vec![]).validate(), Err(DeckDefect::BadLength(0)));

        let asymmetric = Deck::from_tiles(vec![tile(0, "A", 1), tile(1, "A", 2), tile(2, "A", 1), tile(3, "B", 2)]);
        assert_eq!(
            asymmetric.validate(),
            Err(DeckDefect::Asymmetric { a: TileId(0), b: TileId(1) })
        );

        let text = Deck::from_tiles(vec![tile(0, "A", 1), tile(1, "B", 0)]);
        assert_eq!(
            text.validate(),
            Err(DeckDefect::TextMismatch { a: TileId(0), b: TileId(1) })
        );

        let dangling = Deck::from_tiles(vec![tile(0, "A", 5), tile(1, "A", 0)]);
        assert_eq!(dangling.validate(), Err(DeckDefect::DanglingPartner(TileId(0))));

        let selfish = Deck::from_tiles(vec![tile(0, "A", 0), tile(1, "A", 1)]);
        assert_eq!(selfish.validate(), Err(DeckDefect::SelfPartner(TileId(0))));

        let misplaced = Deck::from_tiles(vec![tile(1, "A", 0), tile(0, "A", 1)]);
        assert_eq!(
            misplaced.validate(),
            Err(DeckDefect::Misplaced { tile: TileId(1), index: 0 })
        );

        let repeated = Deck::from_tiles(vec![tile(0, "A", 1), tile(1, "A", 0), tile(2, "A", 3), tile(3, "A", 2)]);
        assert_eq!(
            repeated.validate(),
            Err(DeckDefect::Repeated { text: "A".to_string(), count: 4 })
        );
    }
}
