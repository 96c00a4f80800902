//! Shader pipeline.
//!
//! Compiles GLSL vertex/fragment pairs into a linked program object.
//! Compile and link status are surfaced as typed errors; no zero handle
//! ever reaches a draw call.

mod error;
mod program;
mod source;

pub use error::PipelineError;
pub use program::{ShaderProgram, ShaderStage, compile_shader};
pub use source::ShaderSource;
