use std::fs;
use std::path::{Path, PathBuf};

/// File names the on-disk provider looks for inside its directory.
const VERTEX_FILE: &str = "vertexShader.glsl";
const FRAGMENT_FILE: &str = "fragmentShader.glsl";

/// Passes the 4-component position attribute through to clip space.
const INLINE_VERTEX: &str = "\
#version 330 core

layout(location = 0) in vec4 position;

void main() {
    gl_Position = position;
}
";

/// Constant opaque orange.
const INLINE_FRAGMENT: &str = "\
#version 330 core

out vec4 frag_color;

void main() {
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// Where the GLSL text for the two pipeline stages comes from.
///
/// `Inline` bakes the sources into the binary; `Disk` reads them from a
/// directory at startup. Both carry the same shading semantics, so the
/// provider is purely a configuration choice.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderSource {
    Inline,
    Disk { dir: PathBuf },
}

impl ShaderSource {
    pub fn inline() -> Self {
        ShaderSource::Inline
    }

    pub fn disk(dir: impl Into<PathBuf>) -> Self {
        ShaderSource::Disk { dir: dir.into() }
    }

    /// GLSL text for the vertex stage.
    pub fn vertex(&self) -> String {
        match self {
            ShaderSource::Inline => INLINE_VERTEX.to_string(),
            ShaderSource::Disk { dir } => read_shader_text(&dir.join(VERTEX_FILE)),
        }
    }

    /// GLSL text for the fragment stage.
    pub fn fragment(&self) -> String {
        match self {
            ShaderSource::Inline => INLINE_FRAGMENT.to_string(),
            ShaderSource::Disk { dir } => read_shader_text(&dir.join(FRAGMENT_FILE)),
        }
    }
}

/// Reads a shader file as UTF-8 text, joining lines with a line feed.
///
/// An unreadable file is logged and yields an empty string; compilation of
/// the empty source then fails with a proper driver diagnostic downstream.
fn read_shader_text(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => {
            let mut out = String::with_capacity(text.len());
            for line in text.lines() {
                out.push_str(line);
                out.push('\n');
            }
            out
        }
        Err(err) => {
            log::error!("failed to load shader source from {}: {err}", path.display());
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ochre-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    // ── inline provider ──────────────────────────────────────────────────

    #[test]
    fn inline_sources_are_versioned_glsl() {
        let src = ShaderSource::inline();
        assert!(src.vertex().starts_with("#version 330 core"));
        assert!(src.fragment().starts_with("#version 330 core"));
    }

    #[test]
    fn inline_vertex_forwards_position() {
        assert!(ShaderSource::inline().vertex().contains("gl_Position = position"));
    }

    // ── disk provider ────────────────────────────────────────────────────

    #[test]
    fn disk_reads_both_stage_files() {
        let dir = scratch_dir("shaders");
        fs::write(dir.join(VERTEX_FILE), "void main() {}\n").unwrap();
        fs::write(dir.join(FRAGMENT_FILE), "void main() {}\n").unwrap();

        let src = ShaderSource::disk(&dir);
        assert_eq!(src.vertex(), "void main() {}\n");
        assert_eq!(src.fragment(), "void main() {}\n");
    }

    #[test]
    fn disk_normalizes_crlf_line_endings() {
        let dir = scratch_dir("crlf");
        fs::write(dir.join(VERTEX_FILE), "a\r\nb\r\n").unwrap();

        assert_eq!(ShaderSource::disk(&dir).vertex(), "a\nb\n");
    }

    #[test]
    fn missing_file_yields_empty_source() {
        let src = ShaderSource::disk(std::env::temp_dir().join("ochre-no-such-dir"));
        assert_eq!(src.vertex(), "");
        assert_eq!(src.fragment(), "");
    }
}
