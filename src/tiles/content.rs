//! Tile faces: display text plus an optional cosmetic color.
//!
//! Matching only ever compares `text`. Color is carried through for the
//! renderer and has no effect on the game.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Saturation used for generated tile colors.
pub const FACE_SATURATION: f32 = 0.7;

/// Lightness used for generated tile colors.
pub const FACE_LIGHTNESS: f32 = 0.45;

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a color from RGB channels.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSL. `hue` is a fraction of a full turn; values outside
    /// `0.0..1.0` wrap.
    #[must_use]
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue.rem_euclid(1.0) * 6.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = lightness - chroma / 2.0;
        Self::rgb(r + m, g + m, b + m)
    }

    /// A tile color with a uniformly random hue.
    pub fn random_hue(rng: &mut GameRng) -> Self {
        Self::from_hsl(rng.gen_unit(), FACE_SATURATION, FACE_LIGHTNESS)
    }
}

/// What a tile shows when revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Display string. Two tiles with equal text form a pair.
    pub text: String,

    /// Cosmetic tint. `None` leaves the renderer's default.
    pub color: Option<Color>,
}

impl Content {
    /// Content with no color.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    /// Content tinted with `color`.
    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    /// Whether two contents would form a pair.
    #[must_use]
    pub fn matches(&self, other: &Content) -> bool {
        self.text == other.text
    }
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-4 && (a.g - b.g).abs() < 1e-4 && (a.b - b.b).abs() < 1e-4
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(Color::from_hsl(0.0, 1.0, 0.5), Color::rgb(1.0, 0.0, 0.0)));
        assert!(close(Color::from_hsl(1.0 / 3.0, 1.0, 0.5), Color::rgb(0.0, 1.0, 0.0)));
        assert!(close(Color::from_hsl(2.0 / 3.0, 1.0, 0.5), Color::rgb(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_hsl_grey_and_wrap() {
        assert!(close(Color::from_hsl(0.3, 0.0, 0.25), Color::rgb(0.25, 0.25, 0.25)));
        assert!(close(Color::from_hsl(1.0, 1.0, 0.5), Color::from_hsl(0.0, 1.0, 0.5)));
    }

    #[test]
    fn test_random_hue_in_gamut() {
        let mut rng = GameRng::new(11);
        for _ in 0..200 {
            let c = Color::random_hue(&mut rng);
            for channel in [c.r, c.g, c.b] {
                assert!((-1e-5..=1.0 + 1e-5).contains(&channel), "{c:?}");
            }
        }
    }

    #[test]
    fn test_matching_ignores_color() {
        let plain = Content::new("A");
        let tinted = Content::colored("A", Color::rgb(0.2, 0.4, 0.6));

        assert!(plain.matches(&tinted));
        assert!(!plain.matches(&Content::new("B")));
        assert_ne!(plain, tinted);
    }

    #[test]
    fn test_content_serialization() {
        let content = Content::colored("Q", Color::rgb(0.5, 0.25, 0.0));
        let json = serde_json::to_string(&content).unwrap();
        let deserialized: Content = serde_json::from_str(&json).unwrap();
        assert_eq!(content, deserialized);
    }
}
