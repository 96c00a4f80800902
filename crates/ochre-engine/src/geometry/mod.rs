//! Geometry upload.
//!
//! CPU-side vertex data is defined here and uploaded once into GPU-resident
//! buffers; nothing re-uploads after startup.

mod mesh;

pub use mesh::{Mesh, TRIANGLE_POSITIONS};
