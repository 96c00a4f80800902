//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GL device.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
