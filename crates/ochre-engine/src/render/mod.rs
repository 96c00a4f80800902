//! Frame rendering.
//!
//! Two phases per frame, no state carried between frames: clear the
//! framebuffer, then issue draw calls. All GPU objects are created once at
//! startup; the render path only binds and draws them.

mod frame;

pub use frame::RenderCtx;
