use glow::HasContext;

use crate::geometry::Mesh;
use crate::paint::Color;
use crate::pipeline::ShaderProgram;

/// Renderer-facing context for one frame.
///
/// Obtained through `FrameCtx::render`, which runs the clear phase before
/// handing this out.
pub struct RenderCtx<'a> {
    gl: &'a glow::Context,
}

impl<'a> RenderCtx<'a> {
    pub(crate) fn new(gl: &'a glow::Context) -> Self {
        Self { gl }
    }

    /// Clear phase: resets per-frame GL state and clears the framebuffer.
    ///
    /// Depth testing and face culling stay disabled; this pipeline draws a
    /// single front-facing primitive and never writes depth. The depth
    /// buffer is still cleared alongside color.
    pub(crate) fn clear(&self, color: Color) {
        let gl = self.gl;
        unsafe {
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::CULL_FACE);
            gl.clear_color(color.r, color.g, color.b, color.a);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    /// Draw phase: one non-indexed triangle draw over the mesh.
    pub fn draw_mesh(&self, program: &ShaderProgram, mesh: &Mesh) {
        let gl = self.gl;
        unsafe {
            gl.use_program(Some(program.raw()));
            mesh.bind(gl);
            gl.draw_arrays(glow::TRIANGLES, 0, mesh.vertex_count());
            gl.use_program(None);
        }
    }
}
