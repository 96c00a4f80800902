use std::fmt;

use glow::HasContext;

use super::error::PipelineError;

/// Pipeline stage a shader object belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Compiles one shader object from source.
///
/// On a failed compile the driver's info log is captured, the shader object
/// is deleted, and the error is returned to the caller; no zero handle ever
/// escapes.
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::NativeShader, PipelineError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_enum())
            .map_err(|log| PipelineError::Compile { stage, log })?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            log::error!("{stage} shader failed to compile: {log}");
            return Err(PipelineError::Compile { stage, log });
        }

        Ok(shader)
    }
}

/// A linked GPU program (vertex + fragment stage).
///
/// Created once at startup and referenced for the process lifetime; there is
/// no deletion path, the context teardown reclaims it.
pub struct ShaderProgram {
    raw: glow::NativeProgram,
}

impl ShaderProgram {
    /// Compiles both stages and links them into a program object.
    ///
    /// The intermediate shader objects are detached and deleted whether or
    /// not the link succeeds.
    pub fn link(
        gl: &glow::Context,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, PipelineError> {
        let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
        let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
            Ok(shader) => shader,
            Err(err) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(err);
            }
        };

        unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(log) => {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return Err(PipelineError::Link { log });
                }
            };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            let linked = gl.get_program_link_status(program);

            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !linked {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                log::error!("shader program failed to link: {log}");
                return Err(PipelineError::Link { log });
            }

            Ok(Self { raw: program })
        }
    }

    pub fn raw(&self) -> glow::NativeProgram {
        self.raw
    }
}
