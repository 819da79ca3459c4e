//! Shared utilities: easing curves and frame timing.

pub mod easing;
/// Exponential moving average of frame rate.
pub mod frame_timing;
