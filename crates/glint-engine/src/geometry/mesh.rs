use std::sync::Arc;

use anyhow::{Result, anyhow};
use glow::HasContext;

use super::vertex::Vertex;

/// GPU-resident vertex/index data plus the layout descriptor tying them
/// together.
///
/// Owns three handles: the vertex array (layout descriptor), the vertex
/// buffer and the index buffer. Data is uploaded once at creation and is
/// immutable afterwards. Handles are released on drop; the runtime guarantees
/// this happens while the GL context is still alive.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vertex_array: glow::VertexArray,
    vertex_buffer: glow::Buffer,
    index_buffer: glow::Buffer,
    index_count: i32,
}

impl Mesh {
    /// Allocates the three handles and performs the one-shot upload.
    ///
    /// Binding order matters and is part of the contract:
    /// the vertex array is bound before either buffer so that the index
    /// buffer binding is recorded into it. The vertex buffer may be unbound
    /// once the attribute pointer is configured; the index buffer must stay
    /// associated with the vertex array and is never unbound.
    pub fn upload(gl: &Arc<glow::Context>, vertices: &[Vertex], indices: &[u32]) -> Result<Self> {
        unsafe {
            let vertex_array = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("failed to allocate vertex array: {e}"))?;
            let vertex_buffer = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to allocate vertex buffer: {e}"))?;
            let index_buffer = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to allocate index buffer: {e}"))?;

            gl.bind_vertex_array(Some(vertex_array));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(
                Vertex::ATTRIB_POSITION,
                Vertex::COMPONENTS,
                glow::FLOAT,
                false,
                Vertex::STRIDE,
                Vertex::OFFSET,
            );
            gl.enable_vertex_attrib_array(Vertex::ATTRIB_POSITION);

            // The attribute pointer has captured the vertex buffer; unbinding
            // it is safe. The index buffer binding lives in the vertex array
            // and must not be cleared here.
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            Ok(Self {
                gl: Arc::clone(gl),
                vertex_array,
                vertex_buffer,
                index_buffer,
                index_count: indices.len() as i32,
            })
        }
    }

    /// Number of indices to draw.
    pub fn index_count(&self) -> i32 {
        self.index_count
    }

    pub(crate) fn raw_vertex_array(&self) -> glow::VertexArray {
        self.vertex_array
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vertex_array);
            self.gl.delete_buffer(self.vertex_buffer);
            self.gl.delete_buffer(self.index_buffer);
        }
    }
}
