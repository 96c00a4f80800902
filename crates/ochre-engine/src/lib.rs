//! Ochre engine crate.
//!
//! This crate owns the platform + OpenGL runtime pieces used by the
//! application layer: window/event loop, GL context and surface, the shader
//! pipeline, geometry upload, and the per-frame render path.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod paint;
pub mod pipeline;
pub mod geometry;
pub mod render;
