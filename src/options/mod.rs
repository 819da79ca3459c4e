//! Viewer options with TOML preset support.
//!
//! Camera limits, palette, geometry proportions, and animation timing are
//! consolidated here. Every section uses `#[serde(default)]`, so a partial
//! TOML file (say, only `[camera]`) fills the rest from defaults.

mod animation;
mod camera;
mod colors;
mod display;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use display::DisplayOptions;
use serde::{Deserialize, Serialize};

use crate::error::CubeViewError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Orbit camera parameters.
    pub camera: CameraOptions,
    /// Sticker palette and body colors.
    pub colors: ColorOptions,
    /// Cubie geometry and lighting.
    pub display: DisplayOptions,
    /// Move replay timing.
    pub animation: AnimationOptions,
}

impl Options {
    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CubeViewError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, CubeViewError> {
        toml::from_str(content)
            .map_err(|e| CubeViewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CubeViewError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CubeViewError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CubeViewError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), CubeViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubeViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
min_zoom = 3.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.min_zoom, 3.0);
        assert_eq!(opts.camera.max_zoom, 15.0);
        assert_eq!(opts.animation.move_duration_ms, 300);
    }

    #[test]
    fn easing_is_configurable() {
        let toml_str = r#"
[animation]
move_duration_ms = 120
easing = "linear"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.animation.easing, EasingFunction::Linear);
        assert_eq!(opts.animation.move_duration().as_millis(), 120);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            Options::from_toml_str("[camera\nfovy = 1"),
            Err(CubeViewError::OptionsParse(_))
        ));
    }

    #[test]
    fn unknown_sticker_uses_neutral() {
        let colors = ColorOptions::default();
        assert_eq!(colors.sticker_rgb(None), colors.neutral);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("cubeview-options-test");
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.camera.zoom_step = 1.25;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
