use anyhow::Result;
use glow::HasContext;

/// Triangle corners in normalized device coordinates, `(x, y, z)` per
/// vertex, counter-clockwise.
pub const TRIANGLE_POSITIONS: [f32; 9] = [
    -0.8, -0.8, 0.0, // bottom left
    0.8, -0.8, 0.0, // bottom right
    0.0, 0.8, 0.0, // top
];

/// GPU-resident geometry: a vertex array object referencing one buffer with
/// a single position attribute (slot 0, 3 floats, tightly packed).
pub struct Mesh {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    vertex_count: i32,
}

impl Mesh {
    /// Uploads the fixed triangle.
    pub fn triangle(gl: &glow::Context) -> Result<Self> {
        Self::upload(gl, &TRIANGLE_POSITIONS)
    }

    /// Uploads `positions` (consecutive xyz triples) with a static usage
    /// hint and records the attribute layout in a fresh VAO.
    fn upload(gl: &glow::Context, positions: &[f32]) -> Result<Self> {
        anyhow::ensure!(
            !positions.is_empty() && positions.len() % 3 == 0,
            "vertex positions must be non-empty xyz triples, got {} floats",
            positions.len()
        );

        unsafe {
            let vao = gl.create_vertex_array().map_err(anyhow::Error::msg)?;
            gl.bind_vertex_array(Some(vao));

            let vbo = gl.create_buffer().map_err(anyhow::Error::msg)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(positions),
                glow::STATIC_DRAW,
            );

            // Slot 0: three floats per vertex, not normalized, no gaps.
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 0, 0);

            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                vertex_count: (positions.len() / 3) as i32,
            })
        }
    }

    /// Binds the vertex array and its backing buffer for drawing.
    pub(crate) fn bind(&self, gl: &glow::Context) {
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
        }
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_exactly_nine_floats_in_order() {
        assert_eq!(
            TRIANGLE_POSITIONS,
            [-0.8, -0.8, 0.0, 0.8, -0.8, 0.0, 0.0, 0.8, 0.0]
        );
    }

    #[test]
    fn upload_slice_is_nine_floats_of_bytes() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_POSITIONS);
        assert_eq!(bytes.len(), 9 * std::mem::size_of::<f32>());
    }
}
