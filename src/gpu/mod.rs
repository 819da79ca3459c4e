//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, growable vertex buffers and
//! the depth attachment.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth texture and the shared depth-stencil state.
pub mod texture;
