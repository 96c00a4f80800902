use winit::dpi::PhysicalSize;

use crate::paint::Color;
use crate::render::RenderCtx;
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    /// Live GL function table for this frame.
    pub gl: &'a glow::Context,

    /// Current drawable size in physical pixels.
    pub size: PhysicalSize<u32>,

    /// Timing snapshot for this frame.
    pub time: FrameTime,
}

impl FrameCtx<'_> {
    /// Clears the framebuffer with `clear`, then calls `draw` with a ready
    /// [`RenderCtx`]. The runtime swaps buffers after `on_frame` returns.
    pub fn render<F>(&mut self, clear: Color, draw: F)
    where
        F: FnOnce(&RenderCtx<'_>),
    {
        let rctx = RenderCtx::new(self.gl);
        rctx.clear(clear);
        draw(&rctx);
    }
}
