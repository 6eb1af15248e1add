//! Deck generation.
//!
//! Draws `target / 2` distinct contents by shuffling the de-duplicated pool
//! and taking a prefix, pairs each one up, then shuffles board positions
//! with an independent permutation.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::Deck;
use crate::core::{GameRng, TileId};
use crate::error::{Error, Result};
use crate::tiles::{Content, Tile};

/// Build a shuffled deck of `target_count` tiles from `pool`.
///
/// Duplicate texts in `pool` count once; the first occurrence wins.
///
/// ## Errors
///
/// - [`Error::EmptyDeck`] if `target_count` is zero
/// - [`Error::OddTileCount`] if `target_count` is odd
/// - [`Error::InsufficientVocabulary`] if the pool has fewer than
///   `target_count / 2` distinct texts
///
/// ```
/// use memory_match::core::GameRng;
/// use memory_match::deck::generate;
/// use memory_match::tiles::Content;
///
/// let pool: Vec<_> = ["A", "B", "C"].into_iter().map(Content::new).collect();
/// let deck = generate(&pool, 4, &mut GameRng::new(1)).unwrap();
/// assert_eq!(deck.len(), 4);
/// assert!(deck.validate().is_ok());
/// ```
pub fn generate(pool: &[Content], target_count: usize, rng: &mut GameRng) -> Result<Deck> {
    if target_count == 0 {
        return Err(Error::EmptyDeck);
    }
    if target_count % 2 != 0 {
        return Err(Error::OddTileCount(target_count));
    }

    let mut seen = FxHashSet::default();
    let mut distinct: Vec<&Content> = pool.iter().filter(|c| seen.insert(c.text.as_str())).collect();

    let pairs = target_count / 2;
    if distinct.len() < pairs {
        return Err(Error::InsufficientVocabulary {
            requested_pairs: pairs,
            available: distinct.len(),
        });
    }

    rng.shuffle(&mut distinct);

    let mut tiles = Vec::with_capacity(target_count);
    for (pair, content) in distinct.into_iter().take(pairs).enumerate() {
        let a = TileId::new(2 * pair as u32);
        let b = TileId::new(2 * pair as u32 + 1);
        tiles.push(Tile::new(a, content.clone(), b));
        tiles.push(Tile::new(b, content.clone(), a));
    }

    rng.shuffle(&mut tiles);

    // Renumber to board positions, then repoint partners at the new ids.
    let mut position = vec![TileId::new(0); target_count];
    for (index, tile) in tiles.iter().enumerate() {
        position[tile.id().index()] = TileId::new(index as u32);
    }
    for (index, tile) in tiles.iter_mut().enumerate() {
        let partner = position[tile.partner().index()];
        tile.relocate(TileId::new(index as u32), partner);
    }

    let deck = Deck::from_tiles(tiles);
    debug_assert_eq!(deck.validate(), Ok(()));
    debug!(tiles = deck.len(), pool = pool.len(), "generated deck");

    Ok(deck)
}
