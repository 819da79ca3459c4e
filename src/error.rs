//! Crate-level error and diagnostic types.
//!
//! [`CubeViewError`] is returned by constructors and loaders that sit
//! outside the viewer control surface. [`Diagnostic`] is what the control
//! surface reports instead of failing: every visualization problem degrades
//! to a logged diagnostic and the viewer keeps going.

use std::fmt;

use crate::cube::face::FaceId;
use crate::gpu::render_context::RenderContextError;

/// Errors produced by the cubeview crate.
#[derive(Debug)]
pub enum CubeViewError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Facelet state could not be parsed at all.
    StateParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for CubeViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::StateParse(msg) => write!(f, "state parse error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for CubeViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for CubeViewError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for CubeViewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A non-fatal problem reported by the viewer control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The requested rendering target does not exist; the slot stays empty.
    MissingTarget {
        /// Slot being initialized.
        slot: String,
        /// Container id that could not be resolved.
        container: String,
    },
    /// A face entry is absent from the supplied state.
    MissingFace {
        /// The absent face.
        face: FaceId,
    },
    /// A face entry does not hold exactly nine facelets.
    WrongFaceletCount {
        /// Offending face.
        face: FaceId,
        /// Number of facelets actually supplied.
        count: usize,
    },
    /// A single facelet holds an unrecognized color label.
    MalformedFacelet {
        /// Face holding the facelet.
        face: FaceId,
        /// Row-major facelet index.
        index: usize,
        /// The label as received.
        label: String,
    },
    /// The state payload could not be interpreted at all.
    MalformedState {
        /// Parser message.
        message: String,
    },
    /// A move token could not be parsed and was skipped.
    UnknownMoveToken {
        /// The token as received.
        token: String,
    },
    /// A call named a slot with no live viewer.
    UnknownSlot {
        /// The slot name.
        slot: String,
    },
}

impl Diagnostic {
    /// Log this diagnostic at warn level.
    pub fn log(&self) {
        log::warn!("{self}");
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget { slot, container } => write!(
                f,
                "viewer '{slot}': render target '{container}' not found"
            ),
            Self::MissingFace { face } => {
                write!(f, "face '{}' missing, using neutral color", face.name())
            }
            Self::WrongFaceletCount { face, count } => write!(
                f,
                "face '{}' has {count} facelets, expected 9",
                face.name()
            ),
            Self::MalformedFacelet { face, index, label } => write!(
                f,
                "face '{}' facelet {index}: unknown color '{label}'",
                face.name()
            ),
            Self::MalformedState { message } => {
                write!(f, "malformed cube state: {message}")
            }
            Self::UnknownMoveToken { token } => {
                write!(f, "skipping unknown move token '{token}'")
            }
            Self::UnknownSlot { slot } => {
                write!(f, "no live viewer in slot '{slot}'")
            }
        }
    }
}
