//! The 27 cubies and the pure state → cubie builder.

use glam::IVec3;

use super::color::StickerColor;
use super::face::FaceId;
use super::facelet::{CubeState, FaceletState};

/// A colored square on one outward face of a cubie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    /// Direction the sticker currently faces.
    pub face: FaceId,
    /// Sticker color; `None` draws the neutral placeholder.
    pub color: Option<StickerColor>,
}

/// Exact quarter-turn orientation: images of the home x, y, z axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    /// Where the home +x axis points now.
    pub x: IVec3,
    /// Where the home +y axis points now.
    pub y: IVec3,
    /// Where the home +z axis points now.
    pub z: IVec3,
}

impl Orientation {
    /// Home orientation.
    pub const IDENTITY: Orientation = Orientation {
        x: IVec3::X,
        y: IVec3::Y,
        z: IVec3::Z,
    };
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotate an integer vector by `quarter_turns` × −90° about `normal`.
///
/// Negative angles about an outward normal are clockwise when looking at the
/// face from outside, which is what a positive count means in move notation.
#[must_use]
pub fn rotate_quarter(v: IVec3, normal: IVec3, quarter_turns: i32) -> IVec3 {
    let (cos, sin) = match quarter_turns.rem_euclid(4) {
        0 => (1, 0),
        1 => (0, -1),
        2 => (-1, 0),
        _ => (0, 1),
    };
    v * cos + normal.cross(v) * sin + normal * normal.dot(v) * (1 - cos)
}

/// One of the 27 unit sub-cubes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cubie {
    /// Grid position, each component in {-1, 0, 1}.
    pub position: IVec3,
    /// Accumulated discrete rotation since the state was built.
    pub orientation: Orientation,
    /// Up to three outward stickers.
    pub stickers: Vec<Sticker>,
}

impl Cubie {
    /// Sticker facing `face`, if any.
    #[must_use]
    pub fn sticker(&self, face: FaceId) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.face == face)
    }

    /// Apply a discrete quarter-turn rotation about `normal`.
    pub fn rotate(&mut self, normal: IVec3, quarter_turns: i32) {
        let turn = |v| rotate_quarter(v, normal, quarter_turns);
        self.position = turn(self.position);
        self.orientation = Orientation {
            x: turn(self.orientation.x),
            y: turn(self.orientation.y),
            z: turn(self.orientation.z),
        };
        for sticker in &mut self.stickers {
            if let Some(face) = FaceId::from_normal(turn(sticker.face.normal()))
            {
                sticker.face = face;
            }
        }
    }
}

/// All 27 grid positions in x-major, then y, then z order.
pub fn grid_positions() -> impl Iterator<Item = IVec3> {
    (-1..=1).flat_map(|x| {
        (-1..=1).flat_map(move |y| (-1..=1).map(move |z| IVec3::new(x, y, z)))
    })
}

/// Build the 27 cubie descriptors for a color state.
///
/// Deterministic and stateless. A cubie has a sticker for face `f` exactly
/// when its coordinate on `f`'s axis equals `f`'s sign; the sticker color is
/// the facelet at that position (or the face color for solid input).
#[must_use]
pub fn build_cubies(state: &CubeState) -> Vec<Cubie> {
    grid_positions()
        .map(|position| {
            let stickers = FaceId::ALL
                .into_iter()
                .filter_map(|face| {
                    let index = face.facelet_index(position)?;
                    Some(Sticker {
                        face,
                        color: state.color_at(face, index),
                    })
                })
                .collect();
            Cubie {
                position,
                orientation: Orientation::IDENTITY,
                stickers,
            }
        })
        .collect()
}

/// Read the facelet colors currently shown by a cubie set.
#[must_use]
pub fn facelets_from_cubies(cubies: &[Cubie]) -> FaceletState {
    let mut state = FaceletState::empty();
    for cubie in cubies {
        for sticker in &cubie.stickers {
            if let Some(index) = sticker.face.facelet_index(cubie.position) {
                state.set_facelet(sticker.face, index, sticker.color);
            }
        }
    }
    state
}
