use serde::{Deserialize, Serialize};

use crate::cube::StickerColor;

/// Linear RGB values for the sticker palette, the cubie body, and the
/// placeholder used for unknown facelets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// White stickers.
    pub white: [f32; 3],
    /// Yellow stickers.
    pub yellow: [f32; 3],
    /// Red stickers.
    pub red: [f32; 3],
    /// Orange stickers.
    pub orange: [f32; 3],
    /// Blue stickers.
    pub blue: [f32; 3],
    /// Green stickers.
    pub green: [f32; 3],
    /// Faces of a cubie that carry no sticker.
    pub body: [f32; 3],
    /// Stickers whose color is missing or unrecognized.
    pub neutral: [f32; 3],
    /// Clear color behind the cube.
    pub background: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            white: [0.95, 0.95, 0.95],
            yellow: [1.0, 0.84, 0.0],
            red: [0.72, 0.07, 0.2],
            orange: [1.0, 0.35, 0.0],
            blue: [0.0, 0.27, 0.68],
            green: [0.0, 0.61, 0.28],
            body: [0.07, 0.07, 0.07],
            neutral: [0.5, 0.5, 0.5],
            background: [0.12, 0.12, 0.14],
        }
    }
}

impl ColorOptions {
    /// RGB for a sticker; unknown stickers use the neutral color.
    #[must_use]
    pub fn sticker_rgb(&self, color: Option<StickerColor>) -> [f32; 3] {
        match color {
            Some(StickerColor::White) => self.white,
            Some(StickerColor::Yellow) => self.yellow,
            Some(StickerColor::Red) => self.red,
            Some(StickerColor::Orange) => self.orange,
            Some(StickerColor::Blue) => self.blue,
            Some(StickerColor::Green) => self.green,
            None => self.neutral,
        }
    }
}
