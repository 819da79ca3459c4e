//! Face identifiers, axes, and the facelet index layout.

use std::fmt;

use glam::{IVec3, Vec3};

/// One of the three cube axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right axis.
    X,
    /// Down/up axis.
    Y,
    /// Back/front axis.
    Z,
}

impl Axis {
    /// Component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: IVec3) -> i32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }
}

/// A face of the cube, named by standard move notation.
///
/// Each face has an outward axis and sign: U→+y, D→−y, F→+z, B→−z, L→−x,
/// R→+x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceId {
    /// Up (+y).
    U,
    /// Right (+x).
    R,
    /// Front (+z).
    F,
    /// Down (−y).
    D,
    /// Left (−x).
    L,
    /// Back (−z).
    B,
}

impl FaceId {
    /// All faces in facelet-string order (U, R, F, D, L, B).
    pub const ALL: [FaceId; 6] = [
        FaceId::U,
        FaceId::R,
        FaceId::F,
        FaceId::D,
        FaceId::L,
        FaceId::B,
    ];

    /// Dense index into [`FaceId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::U => 0,
            Self::R => 1,
            Self::F => 2,
            Self::D => 3,
            Self::L => 4,
            Self::B => 5,
        }
    }

    /// The axis this face is perpendicular to.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::R | Self::L => Axis::X,
            Self::U | Self::D => Axis::Y,
            Self::F | Self::B => Axis::Z,
        }
    }

    /// `+1` or `-1`: which end of the axis the face sits on.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::U | Self::R | Self::F => 1,
            Self::D | Self::L | Self::B => -1,
        }
    }

    /// Outward unit normal.
    #[must_use]
    pub fn normal(self) -> IVec3 {
        match self.axis() {
            Axis::X => IVec3::new(self.sign(), 0, 0),
            Axis::Y => IVec3::new(0, self.sign(), 0),
            Axis::Z => IVec3::new(0, 0, self.sign()),
        }
    }

    /// Face whose outward normal is exactly `normal`.
    #[must_use]
    pub fn from_normal(normal: IVec3) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.normal() == normal)
    }

    /// The face on the other end of the same axis.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::U => Self::D,
            Self::D => Self::U,
            Self::R => Self::L,
            Self::L => Self::R,
            Self::F => Self::B,
            Self::B => Self::F,
        }
    }

    /// Notation letter.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::U => 'U',
            Self::R => 'R',
            Self::F => 'F',
            Self::D => 'D',
            Self::L => 'L',
            Self::B => 'B',
        }
    }

    /// Parse a notation letter (case insensitive).
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Self::U),
            'R' => Some(Self::R),
            'F' => Some(Self::F),
            'D' => Some(Self::D),
            'L' => Some(Self::L),
            'B' => Some(Self::B),
            _ => None,
        }
    }

    /// Key used by the JSON facelet object (`"up"`, `"right"`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::U => "up",
            Self::R => "right",
            Self::F => "front",
            Self::D => "down",
            Self::L => "left",
            Self::B => "back",
        }
    }

    /// Whether `pos` lies in this face's outer layer.
    #[must_use]
    pub fn contains(self, pos: IVec3) -> bool {
        self.axis().component(pos) == self.sign()
    }

    /// `(right, down)` directions of the facelet grid as seen from outside.
    ///
    /// Side faces have their top row at +y; U has its top row toward B and
    /// D toward F.
    fn grid_frame(self) -> (IVec3, IVec3) {
        match self {
            Self::U => (IVec3::X, IVec3::Z),
            Self::D => (IVec3::X, IVec3::NEG_Z),
            Self::F => (IVec3::X, IVec3::NEG_Y),
            Self::B => (IVec3::NEG_X, IVec3::NEG_Y),
            Self::L => (IVec3::Z, IVec3::NEG_Y),
            Self::R => (IVec3::NEG_Z, IVec3::NEG_Y),
        }
    }

    /// `(right, up)` directions as floats, for building quads.
    #[must_use]
    pub fn tangents(self) -> (Vec3, Vec3) {
        let (right, down) = self.grid_frame();
        (right.as_vec3(), -down.as_vec3())
    }

    /// Row-major facelet index (0..9) of the cubie at `pos` on this face.
    ///
    /// Returns `None` when `pos` is not in this face's layer.
    #[must_use]
    pub fn facelet_index(self, pos: IVec3) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let (right, down) = self.grid_frame();
        let col = pos.dot(right) + 1;
        let row = pos.dot(down) + 1;
        if !(0..3).contains(&col) || !(0..3).contains(&row) {
            return None;
        }
        Some((row * 3 + col) as usize)
    }

    /// Cubie position of facelet `index` on this face.
    #[must_use]
    pub fn facelet_position(self, index: usize) -> Option<IVec3> {
        if index >= 9 {
            return None;
        }
        let (right, down) = self.grid_frame();
        let row = (index / 3) as i32 - 1;
        let col = (index % 3) as i32 - 1;
        Some(self.normal() + right * col + down * row)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normals_round_trip() {
        for face in FaceId::ALL {
            assert_eq!(FaceId::from_normal(face.normal()), Some(face));
            assert_eq!(face.opposite().normal(), -face.normal());
        }
        assert_eq!(FaceId::from_normal(IVec3::ZERO), None);
    }

    #[test]
    fn facelet_index_inverts_position() {
        for face in FaceId::ALL {
            for i in 0..9 {
                let pos = face.facelet_position(i).unwrap();
                assert!(face.contains(pos));
                assert_eq!(face.facelet_index(pos), Some(i));
            }
        }
    }

    #[test]
    fn center_facelet_is_face_normal() {
        for face in FaceId::ALL {
            assert_eq!(face.facelet_position(4), Some(face.normal()));
        }
    }

    #[test]
    fn tangents_are_right_handed() {
        for face in FaceId::ALL {
            let (right, up) = face.tangents();
            assert_eq!(right.cross(up), face.normal().as_vec3());
        }
    }

    #[test]
    fn up_face_top_row_is_toward_back() {
        assert_eq!(FaceId::U.facelet_position(1), Some(IVec3::new(0, 1, -1)));
        assert_eq!(FaceId::F.facelet_position(0), Some(IVec3::new(-1, 1, 1)));
        assert_eq!(FaceId::D.facelet_position(1), Some(IVec3::new(0, -1, 1)));
    }

    #[test]
    fn letters_parse_case_insensitively() {
        assert_eq!(FaceId::from_letter('r'), Some(FaceId::R));
        assert_eq!(FaceId::from_letter('X'), None);
    }
}
