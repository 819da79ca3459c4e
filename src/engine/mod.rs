//! Viewer lifecycle: the host seam, per-container viewer instances, and
//! the slot registry that owns them.
//!
//! The registry is driven by two event sources, both single-threaded: frame
//! callbacks fired by the host ([`ViewerRegistry::on_frame`]) and control
//! calls from collaborators (`init`, `update_state`, `animate_move`,
//! `destroy`). Every transition is one synchronous `&mut` call.

/// Events queued for the registry's caller.
pub mod event;
/// Traits the embedding environment implements.
pub mod host;
/// A single viewer bound to one container.
pub mod instance;
/// Slot name → viewer map.
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use event::ViewerEvent;
pub use host::{FrameHandle, ListenerSet, RenderSurface, ViewerHost};
pub use instance::{MoveCompletion, ViewerInstance};
pub use registry::ViewerRegistry;
