//! Minimal OpenGL viewer: one orange triangle on a dark red background.
//!
//! Setup-then-loop: window + context, shader program, triangle upload, then
//! render until the window closes or Escape is pressed.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use ochre_engine::core::{App, AppControl, FrameCtx};
use ochre_engine::geometry::Mesh;
use ochre_engine::logging::{LoggingConfig, init_logging};
use ochre_engine::paint::Color;
use ochre_engine::pipeline::{ShaderProgram, ShaderSource};
use ochre_engine::window::{Runtime, RuntimeConfig};

#[derive(Debug, Parser)]
#[command(name = "ochre", version, about = "Draws a triangle. That's it.")]
struct Cli {
    /// Load GLSL from `<DIR>/vertexShader.glsl` and `<DIR>/fragmentShader.glsl`
    /// instead of the built-in sources.
    #[arg(long, value_name = "DIR")]
    shader_dir: Option<PathBuf>,

    /// Window title.
    #[arg(long, default_value = "ochre")]
    title: String,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 640.0)]
    width: f64,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 400.0)]
    height: f64,
}

const CLEAR_COLOR: Color = Color::opaque(0.2, 0.0, 0.0);

/// GPU resources created once in `on_ready` and drawn every frame after.
struct Scene {
    program: ShaderProgram,
    mesh: Mesh,
}

struct TriangleApp {
    source: ShaderSource,
    scene: Option<Scene>,
}

impl TriangleApp {
    fn new(source: ShaderSource) -> Self {
        Self {
            source,
            scene: None,
        }
    }
}

impl App for TriangleApp {
    fn on_ready(&mut self, gl: &glow::Context) -> Result<()> {
        let mesh = Mesh::triangle(gl)?;
        let program = ShaderProgram::link(gl, &self.source.vertex(), &self.source.fragment())?;

        self.scene = Some(Scene { program, mesh });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        // on_ready ran before the first frame; a missing scene means startup
        // was aborted and the loop is already winding down.
        let Some(scene) = self.scene.as_ref() else {
            return AppControl::Exit;
        };

        ctx.render(CLEAR_COLOR, |rctx| {
            rctx.draw_mesh(&scene.program, &scene.mesh);
        });

        AppControl::Continue
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(LoggingConfig::default());
    log::info!("running app");

    let source = match cli.shader_dir {
        Some(dir) => ShaderSource::disk(dir),
        None => ShaderSource::inline(),
    };

    let config = RuntimeConfig {
        title: cli.title,
        initial_size: LogicalSize::new(cli.width, cli.height),
        ..Default::default()
    };

    if let Err(err) = Runtime::run(config, TriangleApp::new(source)) {
        log::error!("quitting due to an error: {err:#}");
        process::exit(-1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn shader_dir_selects_the_disk_provider() {
        let cli = Cli::parse_from(["ochre", "--shader-dir", "./shaders"]);
        assert_eq!(cli.shader_dir, Some(PathBuf::from("./shaders")));
    }

    #[test]
    fn defaults_are_a_640_by_400_ochre_window() {
        let cli = Cli::parse_from(["ochre"]);
        assert_eq!((cli.width, cli.height), (640.0, 400.0));
        assert_eq!(cli.title, "ochre");
        assert_eq!(cli.shader_dir, None);
    }
}
