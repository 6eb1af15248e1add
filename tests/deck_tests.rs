//! Deck generation properties.
//!
//! Every generated deck must be exactly pairs: right length, each text on
//! exactly two tiles, and those two tiles partnered with each other.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use memory_match::{generate, Content, Difficulty, GameRng, Tile, Vocabulary};

fn pool(size: usize) -> Vec<Content> {
    (0..size).map(|i| Content::new(format!("c{i}"))).collect()
}

proptest! {
    #[test]
    fn generated_decks_are_exact_pairs(
        pairs in 1usize..40,
        extra in 0usize..20,
        seed in any::<u64>(),
    ) {
        let deck = generate(&pool(pairs + extra), pairs * 2, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(deck.len(), pairs * 2);
        prop_assert_eq!(deck.validate(), Ok(()));

        let mut counts: FxHashMap<&str, Vec<&Tile>> = FxHashMap::default();
        for tile in &deck {
            counts.entry(tile.text()).or_default().push(tile);
        }
        prop_assert_eq!(counts.len(), pairs);
        for tiles in counts.values() {
            prop_assert_eq!(tiles.len(), 2);
            prop_assert_eq!(tiles[0].partner(), tiles[1].id());
            prop_assert_eq!(tiles[1].partner(), tiles[0].id());
        }
    }

    #[test]
    fn short_pools_are_rejected(pairs in 2usize..40, short in 1usize..10, seed in any::<u64>()) {
        let available = pairs.saturating_sub(short);
        let result = generate(&pool(available), pairs * 2, &mut GameRng::new(seed));
        prop_assert!(result.is_err());
    }

    #[test]
    fn same_seed_same_deck(seed in any::<u64>()) {
        let a = generate(&pool(30), 18, &mut GameRng::new(seed)).unwrap();
        let b = generate(&pool(30), 18, &mut GameRng::new(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn builtin_vocabularies_fill_every_difficulty(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        for vocabulary in Vocabulary::ALL {
            let candidates = vocabulary.candidates(&mut rng);
            for difficulty in Difficulty::ALL {
                let deck = generate(&candidates, difficulty.tile_count(), &mut rng).unwrap();
                prop_assert_eq!(deck.len(), difficulty.tile_count());
                prop_assert!(deck.iter().all(|t| !t.is_visible()));
            }
        }
    }
}

/// Test board positions are roughly uniform across seeds.
///
/// With a two-pair pool, each position holds "c0" half the time.
#[test]
fn test_position_distribution() {
    const TRIALS: u64 = 4000;
    let contents = pool(2);
    let mut c0_at = [0u32; 4];

    for seed in 0..TRIALS {
        let deck = generate(&contents, 4, &mut GameRng::new(seed)).unwrap();
        for tile in &deck {
            if tile.text() == "c0" {
                c0_at[tile.id().index()] += 1;
            }
        }
    }

    for (position, &count) in c0_at.iter().enumerate() {
        let share = f64::from(count) / TRIALS as f64;
        assert!(
            (0.45..0.55).contains(&share),
            "position {position} held c0 {share:.3} of the time"
        );
    }
}

/// Test the drawn subset varies across seeds when the pool is larger.
#[test]
fn test_content_selection_varies() {
    let contents = pool(20);
    let mut seen: FxHashMap<String, u32> = FxHashMap::default();

    for seed in 0..200 {
        let deck = generate(&contents, 8, &mut GameRng::new(seed)).unwrap();
        for tile in &deck {
            *seen.entry(tile.text().to_string()).or_default() += 1;
        }
    }

    assert_eq!(seen.len(), 20, "every content should be drawn eventually");
}
