//! Puzzle model: faces, palette, facelet state, cubies, and moves.
//!
//! Everything here is pure data and pure functions. The viewer rebuilds its
//! cubie set from a [`CubeState`] on every state update and applies
//! [`MoveToken`]s to it as animations finish.

/// The six-color sticker palette.
pub mod color;
/// The 27 cubies and the state → cubie builder.
pub mod cubie;
/// Face identifiers and facelet index layout.
pub mod face;
/// Facelet state, legacy solid-face state, and their parsers.
pub mod facelet;
/// Move notation and discrete layer turns.
pub mod moves;

pub use color::StickerColor;
pub use cubie::{build_cubies, facelets_from_cubies, Cubie, Sticker};
pub use face::{Axis, FaceId};
pub use facelet::{CubeState, FaceletState, SolidFaceColors};
pub use moves::{parse_sequence, MoveToken, ParseMoveError, Turn};
