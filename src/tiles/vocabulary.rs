//! Vocabulary provider.
//!
//! Each `Vocabulary` names a closed pool of tile faces. Pools never repeat a
//! text within themselves. Letters, numbers and symbols get a random-hue
//! color per item when the pool is built; animals stay uncolored.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::content::{Color, Content};
use crate::core::config::UnknownName;
use crate::core::GameRng;

const ANIMALS: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵",
    "🐔", "🐧", "🐦", "🐤", "🦆", "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋",
    "🐌", "🐞", "🐜", "🐢", "🐍", "🦎", "🐙", "🦑", "🦐", "🦀", "🐡", "🐠", "🐟", "🐬", "🐳",
    "🦈", "🐊", "🐅", "🐆", "🦓", "🦍", "🐘", "🦛", "🦏", "🐪", "🦒", "🦘", "🐃", "🐂", "🐄",
    "🐎", "🐖", "🐏", "🐑", "🦙", "🐐", "🦌", "🐕", "🐈", "🐓", "🦃", "🦚", "🦜", "🦢", "🦩",
    "🐇", "🦝", "🦨", "🦦", "🦥", "🐁", "🐀", "🦔", "🐉", "🐲",
];

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const SYMBOLS: &[&str] = &[
    "!", "?", "#", "$", "%", "&", "*", "+", "=", "@", "~", "^", "<", ">", "§", "¶", "∞", "π",
    "Σ", "Ω", "√", "≈", "♠", "♣", "♥", "♦",
];

const HIGHEST_NUMBER: u32 = 20;

/// A named category of tile contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    /// Animal emoji, uncolored.
    #[default]
    Animals,
    /// Capital Latin letters.
    Letters,
    /// "0" through "20".
    Numbers,
    /// Punctuation, math and card-suit glyphs.
    Symbols,
}

impl Vocabulary {
    /// Every vocabulary, in picker order.
    pub const ALL: [Vocabulary; 4] = [
        Vocabulary::Animals,
        Vocabulary::Letters,
        Vocabulary::Numbers,
        Vocabulary::Symbols,
    ];

    /// Stable lowercase name, suitable for preference storage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Vocabulary::Animals => "animals",
            Vocabulary::Letters => "letters",
            Vocabulary::Numbers => "numbers",
            Vocabulary::Symbols => "symbols",
        }
    }

    /// Number of distinct contents in this pool.
    #[must_use]
    pub fn pool_size(self) -> usize {
        match self {
            Vocabulary::Animals => ANIMALS.len(),
            Vocabulary::Letters => LETTERS.len(),
            Vocabulary::Numbers => HIGHEST_NUMBER as usize + 1,
            Vocabulary::Symbols => SYMBOLS.len(),
        }
    }

    /// Whether the pool is colored per item.
    #[must_use]
    pub const fn is_colored(self) -> bool {
        !matches!(self, Vocabulary::Animals)
    }

    /// Build the pool. `rng` only feeds the per-item hues.
    pub fn candidates(self, rng: &mut GameRng) -> Vec<Content> {
        let texts: Vec<String> = match self {
            Vocabulary::Animals => return ANIMALS.iter().copied().map(Content::new).collect(),
            Vocabulary::Letters => LETTERS.chars().map(String::from).collect(),
            Vocabulary::Numbers => (0..=HIGHEST_NUMBER).map(|n| n.to_string()).collect(),
            Vocabulary::Symbols => SYMBOLS.iter().map(|s| s.to_string()).collect(),
        };

        texts
            .into_iter()
            .map(|text| Content::colored(text, Color::random_hue(rng)))
            .collect()
    }
}

impl std::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vocabulary {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vocabulary::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}
