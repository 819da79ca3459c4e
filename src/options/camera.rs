use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Radians of yaw/pitch per pixel of drag.
    pub rotate_speed: f32,
    /// Distance change per wheel notch or pinch step.
    pub zoom_step: f32,
    /// Closest allowed camera distance from the cube center.
    pub min_zoom: f32,
    /// Farthest allowed camera distance from the cube center.
    pub max_zoom: f32,
    /// Pitch magnitude limit in radians (keeps the view off the poles).
    pub pitch_limit: f32,
    /// Yaw at startup and after a reset, radians.
    pub initial_yaw: f32,
    /// Pitch at startup and after a reset, radians.
    pub initial_pitch: f32,
    /// Distance at startup and after a reset.
    pub initial_zoom: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            rotate_speed: 0.01,
            zoom_step: 0.5,
            min_zoom: 4.0,
            max_zoom: 15.0,
            pitch_limit: 1.55,
            initial_yaw: std::f32::consts::FRAC_PI_4,
            initial_pitch: 0.615,
            initial_zoom: 8.0,
        }
    }
}
