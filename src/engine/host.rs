//! The seam between viewers and the environment that hosts them.
//!
//! A host resolves container ids to drawable surfaces, schedules frame
//! callbacks, and wires input listeners. The standalone window implements
//! it with winit; tests implement it with a recording mock.

use crate::scene::SceneFrame;

/// Handle of one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Token for the input listeners attached to one container.
///
/// Not `Clone`: the instance holding it gives it back to the host exactly
/// once, on destroy.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ListenerSet {
    /// Host-assigned id.
    pub id: u64,
    /// Container the listeners are attached to.
    pub container: String,
}

/// A drawable target owned by exactly one viewer.
pub trait RenderSurface {
    /// Current size in physical pixels.
    fn size(&self) -> (u32, u32);

    /// Resize the drawable. Zero-sized dimensions are ignored.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw one frame.
    fn draw(&mut self, frame: &SceneFrame);
}

/// Environment services a viewer needs.
pub trait ViewerHost {
    /// Look up the container and bind a surface to it, or `None` if the
    /// container does not exist.
    fn resolve_surface(
        &mut self,
        container_id: &str,
    ) -> Option<Box<dyn RenderSurface>>;

    /// Schedule a frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a frame callback that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Attach pointer, touch, and wheel listeners to a container.
    fn attach_listeners(&mut self, container_id: &str) -> ListenerSet;

    /// Remove listeners previously attached.
    fn detach_listeners(&mut self, listeners: ListenerSet);
}
