use std::fmt;

use super::program::ShaderStage;

/// A failure while building the shader program.
///
/// `log` carries the driver's diagnostic text verbatim; it is often
/// multi-line and may be empty on some drivers.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Compile { stage: ShaderStage, log: String },
    Link { log: String },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Compile { stage, log } => {
                write!(f, "{stage} shader compilation failed: {log}")
            }
            PipelineError::Link { log } => {
                write!(f, "shader program link failed: {log}")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_stage() {
        let err = PipelineError::Compile {
            stage: ShaderStage::Vertex,
            log: "0:3: error: unmatched brace".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex"));
        assert!(msg.contains("unmatched brace"));
    }

    #[test]
    fn link_error_carries_the_driver_log() {
        let err = PipelineError::Link { log: "no main".to_string() };
        assert_eq!(err.to_string(), "shader program link failed: no main");
    }
}
