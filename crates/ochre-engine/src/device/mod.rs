//! OpenGL device + surface management.
//!
//! This module is responsible for:
//! - creating the GL display, config, context, and window surface
//! - resolving the GL function-pointer table after the context is current
//! - resizing the drawable and presenting frames

mod context;

pub use context::{GlDevice, GlInit};
