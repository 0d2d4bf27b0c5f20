use std::sync::Arc;

use glow::HasContext;

use super::color::Color;
use crate::geometry::Mesh;
use crate::pipeline::Program;

/// Triangle rasterization mode.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PolygonMode {
    #[default]
    Fill,
    /// Wireframe: rasterize triangle edges only.
    Line,
}

impl PolygonMode {
    pub(crate) fn gl_enum(self) -> u32 {
        match self {
            PolygonMode::Fill => glow::FILL,
            PolygonMode::Line => glow::LINE,
        }
    }
}

/// One frame's worth of draw commands.
///
/// Beginning the pass clears the color buffer; the frame is presented by the
/// caller after the pass is dropped.
pub struct RenderPass<'a> {
    gl: &'a Arc<glow::Context>,
}

impl<'a> RenderPass<'a> {
    pub(crate) fn begin(gl: &'a Arc<glow::Context>, clear: Color) -> Self {
        unsafe {
            gl.clear_color(clear.r, clear.g, clear.b, clear.a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        Self { gl }
    }

    /// Applies `mode` to both triangle faces for subsequent draws.
    pub fn set_polygon_mode(&mut self, mode: PolygonMode) {
        unsafe {
            self.gl.polygon_mode(glow::FRONT_AND_BACK, mode.gl_enum());
        }
    }

    /// Issues one indexed draw of `mesh` as triangles with `program` bound.
    ///
    /// The vertex array is unbound again after the call so later setup code
    /// cannot accidentally record into it.
    pub fn draw_indexed(&mut self, mesh: &Mesh, program: &Program) {
        unsafe {
            self.gl.use_program(Some(program.raw()));
            self.gl.bind_vertex_array(Some(mesh.raw_vertex_array()));
            self.gl
                .draw_elements(glow::TRIANGLES, mesh.index_count(), glow::UNSIGNED_INT, 0);
            self.gl.bind_vertex_array(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_modes_map_to_distinct_gl_enums() {
        assert_eq!(PolygonMode::Fill.gl_enum(), glow::FILL);
        assert_eq!(PolygonMode::Line.gl_enum(), glow::LINE);
        assert_ne!(PolygonMode::Fill.gl_enum(), PolygonMode::Line.gl_enum());
    }

    #[test]
    fn default_mode_is_fill() {
        assert_eq!(PolygonMode::default(), PolygonMode::Fill);
    }
}
