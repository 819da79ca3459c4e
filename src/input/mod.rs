//! Input handling: event types and the processor that turns raw pointer
//! events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
