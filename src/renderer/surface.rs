//! Window-backed [`RenderSurface`] drawing through wgpu.

use super::cube::CubeRenderer;
use crate::engine::host::RenderSurface;
use crate::error::CubeViewError;
use crate::gpu::render_context::RenderContext;
use crate::options::DisplayOptions;
use crate::scene::SceneFrame;

/// A wgpu surface plus the cube pipeline drawing into it.
pub struct GpuSurface {
    context: RenderContext,
    renderer: CubeRenderer,
    display: DisplayOptions,
}

impl GpuSurface {
    /// Initialize wgpu for `target` at `size` physical pixels.
    ///
    /// # Errors
    ///
    /// Returns [`CubeViewError::Gpu`] if no adapter, device, or surface
    /// configuration is available.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        display: DisplayOptions,
    ) -> Result<Self, CubeViewError> {
        let context = RenderContext::new(target, size).await?;
        let renderer = CubeRenderer::new(&context);
        Ok(Self {
            context,
            renderer,
            display,
        })
    }
}

impl RenderSurface for GpuSurface {
    fn size(&self) -> (u32, u32) {
        self.context.size()
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.renderer.resize(&self.context.device, width, height);
    }

    fn draw(&mut self, frame: &SceneFrame) {
        let output = match self.context.get_next_frame() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                self.context.reconfigure();
                return;
            }
            Err(e) => {
                log::warn!("skipping frame: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.prepare(&self.context, frame, &self.display);
        let mut encoder = self.context.create_encoder();
        self.renderer.render(&mut encoder, &view, frame.background);
        self.context.submit(encoder);
        output.present();
    }
}
