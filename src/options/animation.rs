use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Move replay timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationOptions {
    /// Time for one layer turn, in milliseconds (half turns included).
    pub move_duration_ms: u64,
    /// Easing curve applied across each turn.
    pub easing: EasingFunction,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            move_duration_ms: 300,
            easing: EasingFunction::default(),
        }
    }
}

impl AnimationOptions {
    /// Move duration as a [`Duration`].
    #[must_use]
    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }
}
