//! Paint model.
//!
//! Scope is deliberately small: this program clears to one color and lets
//! the fragment stage supply the rest.

mod color;

pub use color::Color;
