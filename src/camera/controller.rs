use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Orbit parameters read every frame to place the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Rotation about the world Y axis, radians.
    pub yaw: f32,
    /// Elevation above the XZ plane, radians.
    pub pitch: f32,
    /// Distance from the cube center.
    pub zoom: f32,
}

/// Normalized camera command produced by the input processor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Orbit by a pointer drag delta in pixels.
    Rotate {
        /// Pointer movement since the previous sample.
        delta: Vec2,
    },
    /// Step the zoom distance; positive zooms out.
    Zoom {
        /// Wheel or pinch delta. Only the sign is used.
        delta: f32,
    },
}

/// Yaw/pitch/zoom camera orbiting the origin.
///
/// There is no panning: the target is always the cube center and up is
/// always +Y, so pitch is kept strictly inside ±90°.
#[derive(Debug, Clone)]
pub struct OrbitController {
    state: CameraState,
    initial: CameraState,
    rotate_speed: f32,
    zoom_step: f32,
    min_zoom: f32,
    max_zoom: f32,
    pitch_limit: f32,
    fovy: f32,
    znear: f32,
    zfar: f32,
}

impl OrbitController {
    /// Build a controller from camera options.
    ///
    /// Inverted zoom limits are swapped and the initial pose is clamped
    /// into range.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let (mut min_zoom, mut max_zoom) = (options.min_zoom, options.max_zoom);
        if min_zoom > max_zoom {
            log::warn!(
                "camera min_zoom {min_zoom} exceeds max_zoom {max_zoom}, \
                 swapping"
            );
            std::mem::swap(&mut min_zoom, &mut max_zoom);
        }
        let pitch_limit = options
            .pitch_limit
            .abs()
            .min(std::f32::consts::FRAC_PI_2 - 1e-3);
        let initial = CameraState {
            yaw: options.initial_yaw,
            pitch: options.initial_pitch.clamp(-pitch_limit, pitch_limit),
            zoom: options.initial_zoom.clamp(min_zoom, max_zoom),
        };
        Self {
            state: initial,
            initial,
            rotate_speed: options.rotate_speed,
            zoom_step: options.zoom_step.abs(),
            min_zoom,
            max_zoom,
            pitch_limit,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Current yaw/pitch/zoom.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Orbit by a drag delta in pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.state.yaw += delta.x * self.rotate_speed;
        self.state.pitch = (self.state.pitch + delta.y * self.rotate_speed)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Step the distance by one zoom step. Positive `delta` moves away,
    /// negative moves closer; zero is ignored.
    pub fn zoom_by(&mut self, delta: f32) {
        if delta == 0.0 || delta.is_nan() {
            return;
        }
        self.state.zoom = (self.state.zoom + self.zoom_step * delta.signum())
            .clamp(self.min_zoom, self.max_zoom);
    }

    /// Apply a normalized command.
    pub fn apply(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Rotate { delta } => self.rotate(delta),
            CameraCommand::Zoom { delta } => self.zoom_by(delta),
        }
    }

    /// Restore the configured initial pose.
    pub fn reset(&mut self) {
        self.state = self.initial;
    }

    /// Unit vector from the origin toward the eye.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        let CameraState { yaw, pitch, .. } = self.state;
        Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos())
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.direction() * self.state.zoom
    }

    /// Camera for a viewport of the given aspect ratio.
    #[must_use]
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy: self.fovy,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
