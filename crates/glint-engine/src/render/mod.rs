//! Per-frame drawing: clear, optional draw calls, rasterization state.

mod color;
mod pass;

pub use color::Color;
pub use pass::{PolygonMode, RenderPass};
