//! Draws a quad (two triangles) from uploaded vertex/index data using a
//! minimal shader program.
//!
//! Escape quits; `W` toggles wireframe rasterization.

use anyhow::Result;

use glint_engine::core::{App, AppControl, FrameCtx, SetupCtx};
use glint_engine::geometry::{Mesh, Vertex};
use glint_engine::input::Key;
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::pipeline::{Program, ShaderStage, StageKind};
use glint_engine::render::{Color, PolygonMode};
use glint_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: Color = Color::rgba(0.2, 0.3, 0.3, 1.0);

const VERTEX_SHADER: &str = r"#version 330 core
layout (location = 0) in vec3 a_position;

void main() {
    gl_Position = vec4(a_position, 1.0);
}
";

const FRAGMENT_SHADER: &str = r"#version 330 core
out vec4 frag_color;

void main() {
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}
";

// Quad centered on the origin, drawn as two triangles sharing an edge.
const QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new(0.5, 0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(-0.5, -0.5, 0.0),
    Vertex::new(-0.5, 0.5, 0.0),
];

const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

struct HelloTriangle {
    program: Program,
    quad: Mesh,
    wireframe: bool,
    toggle_held: bool,
}

impl App for HelloTriangle {
    fn init(ctx: &mut SetupCtx<'_>) -> Result<Self> {
        let gl = ctx.gl();

        let vertex = ShaderStage::compile(gl, StageKind::Vertex, VERTEX_SHADER)?;
        let fragment = ShaderStage::compile(gl, StageKind::Fragment, FRAGMENT_SHADER)?;
        let program = Program::link(gl, vertex, fragment)?;

        let quad = Mesh::upload(gl, &QUAD_VERTICES, &QUAD_INDICES)?;

        Ok(Self {
            program,
            quad,
            wireframe: false,
            toggle_held: false,
        })
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        // Edge-detect the toggle so holding the key doesn't flicker.
        let held = ctx.input.is_down(Key::W);
        if held && !self.toggle_held {
            self.wireframe = !self.wireframe;
        }
        self.toggle_held = held;

        let mode = if self.wireframe {
            PolygonMode::Line
        } else {
            PolygonMode::Fill
        };

        ctx.render(CLEAR_COLOR, |pass| {
            pass.set_polygon_mode(mode);
            pass.draw_indexed(&self.quad, &self.program);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Runtime::run::<HelloTriangle>(RuntimeConfig {
        title: "hello triangle".to_string(),
        ..RuntimeConfig::default()
    })?;

    log::info!("goodbye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_index_references_a_quad_vertex() {
        for &i in &QUAD_INDICES {
            assert!((i as usize) < QUAD_VERTICES.len());
        }
    }

    #[test]
    fn quad_is_two_triangles() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert_eq!(QUAD_VERTICES.len(), 4);
    }

    #[test]
    fn shader_sources_target_gl330_core() {
        assert!(VERTEX_SHADER.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER.starts_with("#version 330 core"));
    }
}
