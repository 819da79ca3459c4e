// -- Lint policy ---------------------------------------------------------
// Mirrors the [lints] tables in Cargo.toml.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! GPU-accelerated 3x3x3 puzzle cube viewer built on wgpu.
//!
//! Cubeview turns a facelet description of a cube into 27 colored cubies,
//! lets the user orbit and zoom around them, and replays face turns as
//! smooth layer rotations.
//!
//! # Key entry points
//!
//! - [`engine::ViewerRegistry`] - slot name → viewer, the control surface
//!   collaborators drive (`init`, `update_state`, `animate_move`, `destroy`)
//! - [`engine::ViewerHost`] - what the embedding environment provides
//!   (surfaces, frame callbacks, input listeners)
//! - [`cube::CubeState`] / [`cube::FaceletState`] - the puzzle model
//! - [`options::Options`] - runtime configuration (camera, colors, display,
//!   animation)
//! - `Viewer` (feature `viewer`) - a standalone winit window
//!
//! # Architecture
//!
//! Each viewer owns a cube scene, an orbit camera, and a move animator.
//! Every frame callback advances the active layer turn, flattens the scene
//! into per-cubie transforms and sticker colors, and hands that frame to
//! the viewer's [`engine::RenderSurface`]. Nothing in the control surface
//! fails: problems are logged and queued as [`error::Diagnostic`]s.

pub mod animation;
pub mod camera;
pub mod cube;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use cube::{CubeState, FaceletState, MoveToken, StickerColor};
pub use engine::{ViewerEvent, ViewerHost, ViewerRegistry};
pub use error::{CubeViewError, Diagnostic};
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
