//! Authoritative cube scene and the per-frame snapshot handed to surfaces.
//!
//! The scene owns the 27 cubies of one viewer. A state update builds a
//! complete replacement cube group first and then swaps it in with a single
//! assignment, so a [`SceneFrame`] is always taken from either the previous
//! group or the new one.

pub mod mesh;

use glam::{Mat4, Quat, Vec3};

use crate::camera::core::Camera;
use crate::cube::{
    build_cubies, facelets_from_cubies, CubeState, Cubie, FaceId, FaceletState,
};
use crate::options::Options;

/// In-flight layer rotation: axis, angle in radians, and the indices of
/// the cubies that turn.
pub type LayerRotation<'a> = (Vec3, f32, &'a [usize]);

/// The cube group of one viewer.
#[derive(Debug, Clone)]
pub struct CubeScene {
    cubies: Vec<Cubie>,
}

impl Default for CubeScene {
    fn default() -> Self {
        Self::new(&CubeState::default())
    }
}

impl CubeScene {
    /// Scene holding the cube group for `state`.
    #[must_use]
    pub fn new(state: &CubeState) -> Self {
        Self {
            cubies: build_cubies(state),
        }
    }

    /// Swap in a fully built cube group.
    pub fn replace(&mut self, cubies: Vec<Cubie>) {
        self.cubies = cubies;
    }

    /// Current cubies.
    #[must_use]
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Mutable cubies, for snapping finished layer turns.
    pub fn cubies_mut(&mut self) -> &mut [Cubie] {
        &mut self.cubies
    }

    /// Facelet colors currently shown.
    #[must_use]
    pub fn facelets(&self) -> FaceletState {
        facelets_from_cubies(&self.cubies)
    }

    /// Snapshot the scene for drawing.
    #[must_use]
    pub fn frame(
        &self,
        camera: &Camera,
        rotation: Option<LayerRotation<'_>>,
        options: &Options,
    ) -> SceneFrame {
        let spin = rotation.map(|(axis, angle, members)| {
            (Mat4::from_quat(Quat::from_axis_angle(axis, angle)), members)
        });
        let spacing = options.display.spacing;

        let cubies = self
            .cubies
            .iter()
            .enumerate()
            .map(|(i, cubie)| {
                let mut transform =
                    Mat4::from_translation(cubie.position.as_vec3() * spacing);
                if let Some((spin, members)) = &spin {
                    if members.contains(&i) {
                        transform = *spin * transform;
                    }
                }
                let mut stickers = [None; 6];
                for sticker in &cubie.stickers {
                    stickers[sticker.face.index()] =
                        Some(options.colors.sticker_rgb(sticker.color));
                }
                CubieInstance {
                    transform,
                    stickers,
                }
            })
            .collect();

        SceneFrame {
            view_proj: camera.build_matrix(),
            eye: camera.eye,
            light_dir: Vec3::from_array(options.display.light_dir),
            ambient: options.display.ambient,
            body: options.colors.body,
            background: options.colors.background,
            cubies,
        }
    }
}

/// One cubie as drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubieInstance {
    /// Model transform: grid translation, then any layer rotation.
    pub transform: Mat4,
    /// Sticker RGB per face, indexed by [`FaceId::index`] of the world face
    /// it points at before `transform` is applied. `None` faces show the
    /// body color.
    pub stickers: [Option<[f32; 3]>; 6],
}

impl CubieInstance {
    /// Sticker color facing `face`, if any.
    #[must_use]
    pub fn sticker(&self, face: FaceId) -> Option<[f32; 3]> {
        self.stickers[face.index()]
    }
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    /// Combined view-projection matrix.
    pub view_proj: Mat4,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Direction toward the key light.
    pub light_dir: Vec3,
    /// Ambient light floor.
    pub ambient: f32,
    /// Color of sticker-less cubie faces.
    pub body: [f32; 3],
    /// Clear color.
    pub background: [f32; 3],
    /// The 27 cubies.
    pub cubies: Vec<CubieInstance>,
}
