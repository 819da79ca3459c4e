//! The fixed six-color sticker palette.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A sticker color from the standard six-color palette.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StickerColor {
    /// White (`W`).
    White,
    /// Yellow (`Y`).
    Yellow,
    /// Red (`R`).
    Red,
    /// Orange (`O`).
    Orange,
    /// Blue (`B`).
    Blue,
    /// Green (`G`).
    Green,
}

impl StickerColor {
    /// Every palette entry.
    pub const ALL: [StickerColor; 6] = [
        StickerColor::White,
        StickerColor::Yellow,
        StickerColor::Red,
        StickerColor::Orange,
        StickerColor::Blue,
        StickerColor::Green,
    ];

    /// Single-letter code.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::White => 'W',
            Self::Yellow => 'Y',
            Self::Red => 'R',
            Self::Orange => 'O',
            Self::Blue => 'B',
            Self::Green => 'G',
        }
    }

    /// Parse a single-letter code.
    #[must_use]
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Self::White),
            'Y' => Some(Self::Yellow),
            'R' => Some(Self::Red),
            'O' => Some(Self::Orange),
            'B' => Some(Self::Blue),
            'G' => Some(Self::Green),
            _ => None,
        }
    }

    /// Parse a label: either the single-letter code or the full color name,
    /// case insensitive, surrounding whitespace ignored.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_code(c);
        }
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(label))
    }

    /// Lowercase color name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for StickerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
