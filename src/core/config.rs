//! Game configuration types.
//!
//! A preferences layer hands the engine a `GameConfig` at construction:
//! - `Difficulty`: how many tiles the deck holds
//! - `Vocabulary`: which pool the tile faces come from
//! - `TimingConfig`: presentation delays for mismatch and win resolution
//!
//! All of it is serde-serializable so the caller can persist it however it
//! likes. The engine itself never touches storage.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tiles::Vocabulary;

/// Selects the total tile count for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 8 tiles, 4 pairs.
    #[default]
    Easy,
    /// 18 tiles, 9 pairs.
    Medium,
    /// 36 tiles, 18 pairs.
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of tiles in the deck. Always even.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 18,
            Difficulty::Hard => 36,
        }
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.tile_count() / 2
    }

    /// Stable lowercase name, suitable for preference storage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// A difficulty or vocabulary name that matched nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown name: {0:?}")]
pub struct UnknownName(pub String);

/// Presentation delays.
///
/// Only the ordering is load-bearing: the second-picked tile hides before
/// the first, and a final match registers before the win fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay from a mismatch until the second-picked tile hides.
    #[serde(with = "duration_ms")]
    pub mismatch_hide_first: Duration,

    /// Further delay until the first-picked tile hides and input unlocks.
    #[serde(with = "duration_ms")]
    pub mismatch_hide_second: Duration,

    /// Delay from the final match until the game is won.
    #[serde(with = "duration_ms")]
    pub win_delay: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            mismatch_hide_first: Duration::from_millis(1000),
            mismatch_hide_second: Duration::from_millis(100),
            win_delay: Duration::from_millis(1000),
        }
    }
}

impl TimingConfig {
    /// All delays zero. Resolution still waits for the next `advance`.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            mismatch_hide_first: Duration::ZERO,
            mismatch_hide_second: Duration::ZERO,
            win_delay: Duration::ZERO,
        }
    }

    /// Total time the board stays locked after a mismatch.
    #[must_use]
    pub fn mismatch_window(&self) -> Duration {
        self.mismatch_hide_first.saturating_add(self.mismatch_hide_second)
    }
}

/// Complete game configuration.
///
/// ```
/// use memory_match::core::{Difficulty, GameConfig};
/// use memory_match::tiles::Vocabulary;
///
/// let config = GameConfig::new(Difficulty::Medium, Vocabulary::Letters).with_seed(7);
/// assert_eq!(config.difficulty.tile_count(), 18);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Deck size.
    pub difficulty: Difficulty,

    /// Tile face pool.
    pub vocabulary: Vocabulary,

    /// Presentation delays.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Fixed seed for reproducible decks. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with default timing and a random seed.
    pub fn new(difficulty: Difficulty, vocabulary: Vocabulary) -> Self {
        Self {
            difficulty,
            vocabulary,
            timing: TimingConfig::default(),
            seed: None,
        }
    }

    /// Fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override presentation delays.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_counts_are_even() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.tile_count() % 2, 0, "{difficulty}");
            assert_eq!(difficulty.pair_count() * 2, difficulty.tile_count());
        }
        assert_eq!(Difficulty::Easy.tile_count(), 8);
        assert_eq!(Difficulty::Medium.tile_count(), 18);
        assert_eq!(Difficulty::Hard.tile_count(), 36);
    }

    #[test]
    fn test_difficulty_names() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.name().parse::<Difficulty>(), Ok(difficulty));
        }
        assert_eq!(
            "extreme".parse::<Difficulty>(),
            Err(UnknownName("extreme".to_string()))
        );
    }

    #[test]
    fn test_default_timing_order() {
        let timing = TimingConfig::default();
        assert!(timing.mismatch_hide_second < timing.mismatch_hide_first);
        assert_eq!(timing.mismatch_window(), Duration::from_millis(1100));
        assert_eq!(TimingConfig::instant().mismatch_window(), Duration::ZERO);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(Difficulty::Hard, Vocabulary::Numbers)
            .with_seed(3)
            .with_timing(TimingConfig::instant());

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.vocabulary, Vocabulary::Numbers);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.timing, TimingConfig::instant());
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new(Difficulty::Medium, Vocabulary::Animals).with_seed(9);
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("\"difficulty\":\"medium\""));
        assert!(json.contains("\"mismatch_hide_first\":1000"));

        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_missing_optional_fields() {
        let json = r#"{"difficulty":"hard","vocabulary":"letters"}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.timing, TimingConfig::default());
        assert_eq!(config.seed, None);
    }
}
