use serde::{Deserialize, Serialize};

/// Cube geometry proportions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Center-to-center distance between neighboring cubies.
    pub spacing: f32,
    /// Edge length of one cubie body.
    pub cubie_size: f32,
    /// Sticker edge length as a fraction of the cubie edge.
    pub sticker_scale: f32,
    /// Direction toward the key light (normalized at use).
    pub light_dir: [f32; 3],
    /// Ambient light floor.
    pub ambient: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            cubie_size: 0.95,
            sticker_scale: 0.86,
            light_dir: [0.4, 0.8, 0.6],
            ambient: 0.45,
        }
    }
}
