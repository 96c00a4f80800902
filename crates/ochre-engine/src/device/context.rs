use std::num::NonZeroU32;

use anyhow::{Context as _, Result};
use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

/// Initialization parameters for the GL layer.
///
/// Keep this structure stable and minimal. Add flags only when a concrete
/// platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested context version, core profile.
    pub gl_version: (u8, u8),

    /// Depth buffer size requested from the config, in bits.
    ///
    /// The pipeline never depth-tests, but the clear path clears the depth
    /// buffer, so one must exist.
    pub depth_bits: u8,

    /// Request a swap interval of 1 (block buffer swaps on vblank).
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            gl_version: (3, 3),
            depth_bits: 24,
            vsync: true,
        }
    }
}

/// Owns the GL context, the window surface, and the loaded function table.
///
/// This type is the low-level rendering context. Creation is fatal-on-error
/// all the way down: any failure (display, config, context, surface, or
/// function-pointer loading) aborts startup, there are no retries.
pub struct GlDevice {
    /// Double-buffered surface bound to the window.
    surface: Surface<WindowSurface>,

    /// The current GL context.
    context: PossiblyCurrentContext,

    /// Loaded GL function-pointer table.
    gl: glow::Context,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,
}

impl GlDevice {
    /// Creates the window together with a matching GL context and surface.
    ///
    /// Window and config creation are entangled on some platforms (the
    /// config constrains the window visual), so the window is built here
    /// rather than by the caller.
    pub fn new(
        event_loop: &ActiveEventLoop,
        window_attributes: WindowAttributes,
        init: GlInit,
    ) -> Result<(Window, Self)> {
        let template = ConfigTemplateBuilder::new().with_depth_size(init.depth_bits);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, template, |mut configs| {
                configs.next().expect("no matching GL configs")
            })
            .map_err(|err| anyhow::anyhow!("failed to create window and GL display: {err}"))?;

        let window = window.context("display builder returned no window")?;

        let raw_window_handle = window
            .window_handle()
            .context("failed to get a raw window handle")?
            .as_raw();

        let display = gl_config.display();

        let (major, minor) = init.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let not_current = unsafe { display.create_context(&gl_config, &context_attributes) }
            .context("failed to create the OpenGL context")?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .context("failed to build surface attributes")?;
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }
            .context("failed to create the window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make the OpenGL context current")?;

        // The function-pointer table must be resolved after the context is
        // current; every GL call below goes through it.
        let gl =
            unsafe { glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name)) };

        if init.vsync {
            if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                log::warn!("vsync unavailable: {err}");
            }
        }

        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        log::info!("OpenGL context ready: {version}");

        let size = window.inner_size();

        Ok((
            window,
            Self {
                surface,
                context,
                gl,
                size,
            },
        ))
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Current drawable size in physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Resizes the drawable and updates the GL viewport to the new
    /// framebuffer size in physical pixels.
    ///
    /// Zero dimensions (minimized window on some platforms) are clamped
    /// to 1.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let width = new_size.width.max(1);
        let height = new_size.height.max(1);

        self.surface.resize(
            &self.context,
            NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
        );
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) };

        self.size = PhysicalSize::new(width, height);
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}
