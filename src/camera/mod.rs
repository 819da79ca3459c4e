//! Camera system for viewing the cube.
//!
//! Provides an orbital camera with yaw/pitch rotation and clamped zoom
//! around the cube center.

/// Orbit controller driven by normalized camera commands.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
