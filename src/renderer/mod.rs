//! wgpu rendering for the cube.
//!
//! [`cube::CubeRenderer`] owns the pipeline and buffers;
//! [`surface::GpuSurface`] pairs it with a window surface and implements
//! [`RenderSurface`](crate::engine::host::RenderSurface).

pub mod cube;
pub mod surface;

pub use surface::GpuSurface;
