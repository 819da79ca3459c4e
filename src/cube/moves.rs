//! Move tokens (`R`, `U'`, `F2`) and their discrete effect on cubies.

use std::error::Error;
use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use super::cubie::{build_cubies, facelets_from_cubies, Cubie};
use super::face::FaceId;
use super::facelet::FaceletState;

/// How far a face layer turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Quarter turn, clockwise seen from outside the face.
    Clockwise,
    /// Quarter turn, counter-clockwise seen from outside the face.
    CounterClockwise,
    /// Half turn.
    Double,
}

impl Turn {
    /// Signed quarter-turn count (clockwise positive).
    #[must_use]
    pub fn quarter_turns(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
            Self::Double => 2,
        }
    }

    /// Inverse turn.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
            Self::Double => Self::Double,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::CounterClockwise => "'",
            Self::Double => "2",
        }
    }
}

/// A single face turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken {
    /// The face whose outer layer turns.
    pub face: FaceId,
    /// Turn amount and direction.
    pub turn: Turn,
}

impl MoveToken {
    /// Construct a move.
    #[must_use]
    pub fn new(face: FaceId, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    /// Signed rotation angle in radians about the face's outward normal.
    #[must_use]
    pub fn angle(self) -> f32 {
        -(self.turn.quarter_turns() as f32) * FRAC_PI_2
    }

    /// Whether a cubie at `position` belongs to the turning layer.
    #[must_use]
    pub fn in_layer(self, position: glam::IVec3) -> bool {
        self.face.contains(position)
    }

    /// Indices of the cubies currently in the turning layer.
    #[must_use]
    pub fn layer_members(self, cubies: &[Cubie]) -> Vec<usize> {
        cubies
            .iter()
            .enumerate()
            .filter(|(_, c)| self.in_layer(c.position))
            .map(|(i, _)| i)
            .collect()
    }

    /// Snap the given cubies to the end orientation of this move.
    pub fn apply_to(self, cubies: &mut [Cubie], members: &[usize]) {
        for &i in members {
            if let Some(cubie) = cubies.get_mut(i) {
                cubie.rotate(self.face.normal(), self.turn.quarter_turns());
            }
        }
    }

    /// Apply this move to every cubie in its layer.
    pub fn apply(self, cubies: &mut [Cubie]) {
        let members = self.layer_members(cubies);
        self.apply_to(cubies, &members);
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turn.suffix())
    }
}

/// A token that is not valid move notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError {
    /// The token as received.
    pub token: String,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move token '{}'", self.token)
    }
}

impl Error for ParseMoveError {}

impl FromStr for MoveToken {
    type Err = ParseMoveError;

    /// Parse `X`, `X'`, `X2` (or `X2'`), where `X` is a face letter in
    /// either case. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            token: s.to_owned(),
        };
        let mut chars = s.trim().chars();
        let face = chars.next().and_then(FaceId::from_letter).ok_or_else(err)?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" | "’" => Turn::CounterClockwise,
            "2" | "2'" => Turn::Double,
            _ => return Err(err()),
        };
        Ok(Self::new(face, turn))
    }
}

/// Split a whitespace-separated sequence into moves.
///
/// Returns the parsed moves and the tokens that failed to parse, both in
/// input order.
#[must_use]
pub fn parse_sequence(input: &str) -> (Vec<MoveToken>, Vec<String>) {
    let mut moves = Vec::new();
    let mut rejected = Vec::new();
    for token in input.split_whitespace() {
        match token.parse::<MoveToken>() {
            Ok(mv) => moves.push(mv),
            Err(ParseMoveError { token }) => rejected.push(token),
        }
    }
    (moves, rejected)
}

impl FaceletState {
    /// The state after applying `mv`.
    #[must_use]
    pub fn apply_move(&self, mv: MoveToken) -> Self {
        let mut cubies = build_cubies(&self.clone().into());
        mv.apply(&mut cubies);
        facelets_from_cubies(&cubies)
    }

    /// The state after applying every move in order.
    #[must_use]
    pub fn apply_moves(&self, moves: &[MoveToken]) -> Self {
        let mut cubies = build_cubies(&self.clone().into());
        for mv in moves {
            mv.apply(&mut cubies);
        }
        facelets_from_cubies(&cubies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::color::StickerColor;

    fn mv(s: &str) -> MoveToken {
        s.parse().unwrap()
    }

    #[test]
    fn parses_notation() {
        assert_eq!(mv("R"), MoveToken::new(FaceId::R, Turn::Clockwise));
        assert_eq!(
            mv("u'"),
            MoveToken::new(FaceId::U, Turn::CounterClockwise)
        );
        assert_eq!(mv(" F2 "), MoveToken::new(FaceId::F, Turn::Double));
        assert_eq!(mv("B2'"), MoveToken::new(FaceId::B, Turn::Double));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "X", "R3", "RR", "M"] {
            assert!(bad.parse::<MoveToken>().is_err(), "{bad} parsed");
        }
    }

    #[test]
    fn display_round_trips() {
        for s in ["R", "U'", "F2", "D", "L'", "B2"] {
            assert_eq!(mv(s).to_string(), s);
        }
    }

    #[test]
    fn sequence_keeps_order_and_rejects() {
        let (moves, rejected) = parse_sequence("R U  R' Q U'");
        assert_eq!(moves, vec![mv("R"), mv("U"), mv("R'"), mv("U'")]);
        assert_eq!(rejected, vec!["Q".to_owned()]);
    }

    #[test]
    fn up_turn_moves_front_row_to_left() {
        let state = FaceletState::solved().apply_move(mv("U"));
        for i in 0..3 {
            assert_eq!(state.facelet(FaceId::L, i), Some(StickerColor::Red));
            assert_eq!(state.facelet(FaceId::F, i), Some(StickerColor::Blue));
        }
        assert_eq!(state.facelet(FaceId::F, 3), Some(StickerColor::Red));
        assert_eq!(
            state.face(FaceId::U),
            FaceletState::solved().face(FaceId::U)
        );
    }

    #[test]
    fn right_turn_moves_front_column_up() {
        let state = FaceletState::solved().apply_move(mv("R"));
        for i in [2, 5, 8] {
            assert_eq!(state.facelet(FaceId::U, i), Some(StickerColor::Red));
            assert_eq!(state.facelet(FaceId::F, i), Some(StickerColor::Yellow));
        }
    }

    #[test]
    fn four_quarter_turns_restore() {
        let (start, _) = FaceletState::from_facelet_string(
            "WRGYWBOOYBRWGBYRWGOYBGRORWYGOBWYGRBOYRGWOBYWRBGOWRYGBO",
        );
        for face in FaceId::ALL {
            let m = MoveToken::new(face, Turn::Clockwise);
            assert_eq!(start.apply_moves(&[m, m, m, m]), start);
            assert_eq!(start.apply_moves(&[m, m.inverse()]), start);
            assert_eq!(
                start.apply_moves(&[MoveToken::new(face, Turn::Double)]),
                start.apply_moves(&[m, m])
            );
        }
    }

    #[test]
    fn sexy_move_has_order_six() {
        let (moves, _) = parse_sequence("R U R' U'");
        let mut state = FaceletState::solved();
        for _ in 0..6 {
            state = state.apply_moves(&moves);
        }
        assert!(state.is_solved());
        assert!(!FaceletState::solved().apply_moves(&moves).is_solved());
    }

    #[test]
    fn layer_has_nine_members() {
        let cubies = build_cubies(&FaceletState::solved().into());
        for face in FaceId::ALL {
            let m = MoveToken::new(face, Turn::Clockwise);
            assert_eq!(m.layer_members(&cubies).len(), 9);
        }
    }
}
