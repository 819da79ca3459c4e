/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds mouse and touch into a single pointer stream and converts them
/// into [`CameraCommand`](crate::camera::controller::CameraCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// let moved = InputEvent::CursorMoved { x: 100.0, y: 200.0 };
/// if let Some(cmd) = input.handle_event(moved) {
///     orbit.apply(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A finger touched down.
    TouchStart {
        /// Platform touch identifier.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A finger moved.
    TouchMove {
        /// Platform touch identifier.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A finger lifted or the touch was cancelled.
    TouchEnd {
        /// Platform touch identifier.
        id: u64,
    },
    /// Scroll wheel, DOM `deltaY` convention (positive = zoom out).
    Scroll {
        /// Scroll amount (positive = zoom out, negative = zoom in).
        delta: f32,
    },
    /// Pinch gesture (positive = fingers closing = zoom out).
    Pinch {
        /// Distance change since the previous pinch sample, same sign
        /// convention as [`InputEvent::Scroll`].
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
