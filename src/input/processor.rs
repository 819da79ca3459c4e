//! Converts raw platform events into camera commands.
//!
//! The `InputProcessor` owns all transient pointer state. Mouse and touch
//! are normalized to one pointer: the most recently started pointer is
//! active and every other pointer's moves and releases are ignored, so a
//! touch drag and a mouse drag over the same path orbit identically.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::controller::CameraCommand;

/// The pointer currently driving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Touch(u64),
}

/// Converts raw window events into [`CameraCommand`]s.
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Pointer that owns the current drag, if any.
    active: Option<Pointer>,
    /// Last sampled position of the active pointer. `None` until the
    /// first sample of a mouse drag that began before any cursor move.
    last: Option<Vec2>,
    /// Last known cursor position, tracked even while no button is held.
    cursor: Option<Vec2>,
}

impl InputProcessor {
    /// Create a processor with no active pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Drop any active drag without emitting a command.
    pub fn release(&mut self) {
        self.active = None;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let at = Vec2::new(x, y);
                self.cursor = Some(at);
                self.drag_to(Pointer::Mouse, at)
            }
            InputEvent::MouseButton { button, pressed } => {
                if button != MouseButton::Left {
                    return None;
                }
                if pressed {
                    self.begin(Pointer::Mouse, self.cursor);
                } else {
                    self.end(Pointer::Mouse);
                }
                None
            }
            InputEvent::TouchStart { id, x, y } => {
                self.begin(Pointer::Touch(id), Some(Vec2::new(x, y)));
                None
            }
            InputEvent::TouchMove { id, x, y } => {
                self.drag_to(Pointer::Touch(id), Vec2::new(x, y))
            }
            InputEvent::TouchEnd { id } => {
                self.end(Pointer::Touch(id));
                None
            }
            InputEvent::Scroll { delta } | InputEvent::Pinch { delta } => {
                (delta != 0.0).then_some(CameraCommand::Zoom { delta })
            }
        }
    }

    fn begin(&mut self, pointer: Pointer, at: Option<Vec2>) {
        self.active = Some(pointer);
        self.last = at;
    }

    fn end(&mut self, pointer: Pointer) {
        if self.active == Some(pointer) {
            self.active = None;
        }
    }

    fn drag_to(&mut self, pointer: Pointer, at: Vec2) -> Option<CameraCommand> {
        if self.active != Some(pointer) {
            return None;
        }
        // An unanchored drag takes its first sample as the origin.
        let last = self.last.replace(at)?;
        let delta = at - last;
        (delta != Vec2::ZERO).then_some(CameraCommand::Rotate { delta })
    }
}
