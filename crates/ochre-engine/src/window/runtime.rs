use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{GlDevice, GlInit};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub gl: GlInit,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "ochre".to_string(),
            initial_size: LogicalSize::new(640.0, 400.0),
            gl: GlInit::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the blocking setup-then-loop sequence: create window + context,
    /// hand the app one `on_ready` call, then render until exit.
    ///
    /// Any startup failure (platform, context, or `on_ready`) is returned to
    /// the caller; a normal close returns `Ok`.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.startup_error.take() {
            return Err(err);
        }

        log::info!("shutting down");
        Ok(())
    }
}

/// Live window + GL state.
///
/// `device` is declared before `window` so the GL context and surface drop
/// before the window they were created against.
struct WindowState {
    device: GlDevice,
    window: Window,
    clock: FrameClock,
}

struct RuntimeState<A>
where
    A: App,
{
    config: RuntimeConfig,
    app: A,

    state: Option<WindowState>,
    exit_requested: bool,
    startup_error: Option<anyhow::Error>,
}

impl<A> RuntimeState<A>
where
    A: App,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            state: None,
            exit_requested: false,
            startup_error: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    /// One-time startup: window, GL device, and the app's GPU resources.
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let (window, device) = GlDevice::new(event_loop, attrs, self.config.gl.clone())?;

        self.app
            .on_ready(device.gl())
            .context("application startup failed")?;

        self.state = Some(WindowState {
            device,
            window,
            clock: FrameClock::default(),
        });

        Ok(())
    }

    /// Drives one frame: tick the clock, let the app draw, present.
    fn render_frame(&mut self) -> AppControl {
        let (app, state) = (&mut self.app, &mut self.state);
        let Some(state) = state.as_mut() else {
            return AppControl::Continue;
        };

        let time = state.clock.tick();
        let mut ctx = FrameCtx {
            gl: state.device.gl(),
            size: state.device.size(),
            time,
        };

        let control = app.on_frame(&mut ctx);

        if let Err(err) = state.device.swap_buffers() {
            log::error!("failed to present frame: {err:#}");
            return AppControl::Exit;
        }

        control
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        if let Err(err) = self.init_window(event_loop) {
            log::error!("startup failed: {err:#}");
            self.startup_error = Some(err);
            self.request_exit(event_loop);
            return;
        }

        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; frame pacing comes from the swap interval.
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // Nothing renders once exit is requested, even if events are still
        // queued for this iteration.
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.state.as_ref().map(|s| s.window.id()) != Some(window_id) {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.request_exit(event_loop);
            }

            WindowEvent::KeyboardInput { ref event, .. } if is_escape(event) => {
                log::info!("escape pressed, closing");
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(state) = self.state.as_mut() {
                    state.device.resize(new_size);
                    state.window.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(state) = self.state.as_mut() {
                    let new_size = state.window.inner_size();
                    state.device.resize(new_size);
                    state.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => {
                if self.render_frame() == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}

/// The single input check this program has: a pressed Escape.
fn is_escape(event: &KeyEvent) -> bool {
    event.state.is_pressed() && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_startup_window() {
        let config = RuntimeConfig::default();
        assert_eq!(config.title, "ochre");
        assert_eq!(config.initial_size, LogicalSize::new(640.0, 400.0));
        assert_eq!(config.gl.gl_version, (3, 3));
    }
}
