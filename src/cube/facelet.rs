//! Logical color state: six faces of nine facelets each.
//!
//! Input arrives either as a JSON object keyed by face name, or as a
//! 54-character facelet string in U, R, F, D, L, B order. Both parsers are
//! lenient: anything they cannot interpret becomes a `None` facelet (drawn
//! in the neutral placeholder color) plus a [`Diagnostic`]. Color counts and
//! parity are never checked.

use serde::Deserialize;

use super::color::StickerColor;
use super::face::FaceId;
use crate::error::{CubeViewError, Diagnostic};

/// The nine facelets of one face, row-major, index 4 is the center.
pub type FaceFacelets = [Option<StickerColor>; 9];

/// Full 54-facelet color assignment.
///
/// `None` marks a facelet whose label was missing or unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaceletState {
    faces: [FaceFacelets; 6],
}

impl FaceletState {
    /// State with every facelet unknown.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The solved cube in the standard scheme: U white, D yellow, F red,
    /// B orange, R blue, L green.
    #[must_use]
    pub fn solved() -> Self {
        let mut state = Self::default();
        for face in FaceId::ALL {
            state.faces[face.index()] = [Some(solved_color(face)); 9];
        }
        state
    }

    /// Facelets of one face.
    #[must_use]
    pub fn face(&self, face: FaceId) -> &FaceFacelets {
        &self.faces[face.index()]
    }

    /// Replace all facelets of one face.
    pub fn set_face(&mut self, face: FaceId, facelets: FaceFacelets) {
        self.faces[face.index()] = facelets;
    }

    /// A single facelet; out-of-range indices read as unknown.
    #[must_use]
    pub fn facelet(&self, face: FaceId, index: usize) -> Option<StickerColor> {
        self.faces[face.index()].get(index).copied().flatten()
    }

    /// Overwrite a single facelet. Out-of-range indices are ignored.
    pub fn set_facelet(
        &mut self,
        face: FaceId,
        index: usize,
        color: Option<StickerColor>,
    ) {
        if let Some(slot) = self.faces[face.index()].get_mut(index) {
            *slot = color;
        }
    }

    /// Whether every face is fully known and uniformly colored.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|facelets| {
            facelets[4].is_some() && facelets.iter().all(|c| *c == facelets[4])
        })
    }

    /// Parse a facelet string (54 color codes, U, R, F, D, L, B order).
    ///
    /// Whitespace is ignored. A wrong length or an unknown code yields
    /// diagnostics; the affected facelets stay unknown.
    #[must_use]
    pub fn from_facelet_string(input: &str) -> (Self, Vec<Diagnostic>) {
        let mut state = Self::default();
        let mut diagnostics = Vec::new();
        let codes: Vec<char> =
            input.chars().filter(|c| !c.is_whitespace()).collect();
        if codes.len() != 54 {
            diagnostics.push(Diagnostic::MalformedState {
                message: format!(
                    "facelet string has {} codes, expected 54",
                    codes.len()
                ),
            });
        }
        for (i, &code) in codes.iter().take(54).enumerate() {
            let face = FaceId::ALL[i / 9];
            let index = i % 9;
            match StickerColor::from_code(code) {
                Some(color) => state.faces[face.index()][index] = Some(color),
                None => diagnostics.push(Diagnostic::MalformedFacelet {
                    face,
                    index,
                    label: code.to_string(),
                }),
            }
        }
        (state, diagnostics)
    }

    /// Render as a 54-character facelet string; unknown facelets print `?`.
    #[must_use]
    pub fn to_facelet_string(&self) -> String {
        FaceId::ALL
            .iter()
            .flat_map(|face| self.faces[face.index()].iter())
            .map(|c| c.map_or('?', StickerColor::code))
            .collect()
    }
}

/// Face color in the solved scheme.
#[must_use]
pub fn solved_color(face: FaceId) -> StickerColor {
    match face {
        FaceId::U => StickerColor::White,
        FaceId::D => StickerColor::Yellow,
        FaceId::F => StickerColor::Red,
        FaceId::B => StickerColor::Orange,
        FaceId::R => StickerColor::Blue,
        FaceId::L => StickerColor::Green,
    }
}

/// Legacy state shape: a single color per face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolidFaceColors {
    colors: [Option<StickerColor>; 6],
}

impl SolidFaceColors {
    /// Build from a per-face lookup.
    pub fn from_fn(mut f: impl FnMut(FaceId) -> Option<StickerColor>) -> Self {
        let mut colors = [None; 6];
        for face in FaceId::ALL {
            colors[face.index()] = f(face);
        }
        Self { colors }
    }

    /// Color of one face.
    #[must_use]
    pub fn face(&self, face: FaceId) -> Option<StickerColor> {
        self.colors[face.index()]
    }
}

/// Cube color input, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CubeState {
    /// One color per face (every facelet of a face shares it).
    SolidFace(SolidFaceColors),
    /// Full 54-facelet assignment.
    FullFacelet(FaceletState),
}

impl Default for CubeState {
    fn default() -> Self {
        Self::FullFacelet(FaceletState::empty())
    }
}

impl From<FaceletState> for CubeState {
    fn from(state: FaceletState) -> Self {
        Self::FullFacelet(state)
    }
}

impl CubeState {
    /// Color of facelet `index` on `face`.
    #[must_use]
    pub fn color_at(&self, face: FaceId, index: usize) -> Option<StickerColor> {
        match self {
            Self::SolidFace(solid) => solid.face(face),
            Self::FullFacelet(state) => state.facelet(face, index),
        }
    }

    /// Expand to the full facelet form.
    #[must_use]
    pub fn to_facelets(&self) -> FaceletState {
        match self {
            Self::FullFacelet(state) => state.clone(),
            Self::SolidFace(solid) => {
                let mut state = FaceletState::empty();
                for face in FaceId::ALL {
                    state.set_face(face, [solid.face(face); 9]);
                }
                state
            }
        }
    }

    /// Parse the JSON facelet object.
    ///
    /// Accepts `null` (empty state), an object whose faces are arrays of
    /// nine color codes, or the legacy object whose faces are single color
    /// codes. Only unparseable JSON is an error; everything else degrades
    /// to neutral facelets with diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`CubeViewError::StateParse`] when `json` is not valid JSON or
    /// not an object.
    pub fn from_json(
        json: &str,
    ) -> Result<(Self, Vec<Diagnostic>), CubeViewError> {
        let raw: Option<RawState> = serde_json::from_str(json)
            .map_err(|e| CubeViewError::StateParse(e.to_string()))?;
        Ok(Self::from_raw(raw.unwrap_or_default()))
    }

    fn from_raw(mut raw: RawState) -> (Self, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let faces: Vec<(FaceId, Option<RawFace>)> =
            FaceId::ALL.iter().map(|&f| (f, raw.take(f))).collect();

        let any_present = faces.iter().any(|(_, raw)| raw.is_some());
        let all_solid = faces
            .iter()
            .all(|(_, raw)| matches!(raw, None | Some(RawFace::Solid(_))));

        if any_present && all_solid {
            let solid = SolidFaceColors::from_fn(|face| {
                let (_, raw) = &faces[face.index()];
                match raw {
                    Some(RawFace::Solid(label)) => {
                        parse_label(face, 4, label, &mut diagnostics)
                    }
                    _ => {
                        diagnostics.push(Diagnostic::MissingFace { face });
                        None
                    }
                }
            });
            return (Self::SolidFace(solid), diagnostics);
        }

        let mut state = FaceletState::empty();
        for (face, raw) in faces {
            let facelets = match raw {
                None => {
                    diagnostics.push(Diagnostic::MissingFace { face });
                    continue;
                }
                Some(RawFace::Solid(label)) => {
                    [parse_label(face, 4, &label, &mut diagnostics); 9]
                }
                Some(RawFace::Facelets(values)) => {
                    parse_face(face, &values, &mut diagnostics)
                }
                Some(RawFace::Other(value)) => {
                    diagnostics.push(Diagnostic::MalformedState {
                        message: format!(
                            "face '{}' is neither a facelet list nor a \
                             color code: {value}",
                            face.name()
                        ),
                    });
                    continue;
                }
            };
            state.set_face(face, facelets);
        }
        (Self::FullFacelet(state), diagnostics)
    }
}

fn parse_label(
    face: FaceId,
    index: usize,
    label: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<StickerColor> {
    let color = StickerColor::parse(label);
    if color.is_none() {
        diagnostics.push(Diagnostic::MalformedFacelet {
            face,
            index,
            label: label.to_owned(),
        });
    }
    color
}

fn parse_face(
    face: FaceId,
    values: &[serde_json::Value],
    diagnostics: &mut Vec<Diagnostic>,
) -> FaceFacelets {
    if values.len() != 9 {
        diagnostics.push(Diagnostic::WrongFaceletCount {
            face,
            count: values.len(),
        });
    }
    let mut facelets = [None; 9];
    for (index, value) in values.iter().take(9).enumerate() {
        facelets[index] = match value {
            serde_json::Value::String(label) => {
                parse_label(face, index, label, diagnostics)
            }
            other => {
                diagnostics.push(Diagnostic::MalformedFacelet {
                    face,
                    index,
                    label: other.to_string(),
                });
                None
            }
        };
    }
    facelets
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFace {
    Facelets(Vec<serde_json::Value>),
    Solid(String),
    Other(serde_json::Value),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawState {
    up: Option<RawFace>,
    down: Option<RawFace>,
    left: Option<RawFace>,
    right: Option<RawFace>,
    front: Option<RawFace>,
    back: Option<RawFace>,
}

impl RawState {
    fn take(&mut self, face: FaceId) -> Option<RawFace> {
        match face {
            FaceId::U => self.up.take(),
            FaceId::D => self.down.take(),
            FaceId::L => self.left.take(),
            FaceId::R => self.right.take(),
            FaceId::F => self.front.take(),
            FaceId::B => self.back.take(),
        }
    }
}
