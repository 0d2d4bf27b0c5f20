//! Glint engine crate.
//!
//! This crate owns the window/context bootstrap, the fixed-function render
//! loop, the shader build pipeline and geometry upload used by the demo
//! binaries.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod pipeline;
pub mod geometry;
pub mod render;

// Re-exported so applications can name winit types (window sizes, key codes)
// without pinning their own copy of the dependency.
pub use winit;
