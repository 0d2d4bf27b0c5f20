use bytemuck::{Pod, Zeroable};

/// A single vertex: position only, three contiguous floats.
///
/// The byte layout of `[Vertex]` is exactly the byte layout the attribute
/// pointer declares: tightly packed, no padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }

    /// Shader attribute location of the position input.
    pub const ATTRIB_POSITION: u32 = 0;

    /// Components per vertex attribute.
    pub const COMPONENTS: i32 = 3;

    /// Byte distance between consecutive vertices.
    pub const STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;

    /// Byte offset of the position attribute inside a vertex.
    pub const OFFSET: i32 = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_three_floats() {
        assert_eq!(Vertex::STRIDE, 12);
        assert_eq!(Vertex::OFFSET, 0);
        assert_eq!(Vertex::COMPONENTS, 3);
    }

    #[test]
    fn vertex_bytes_round_trip() {
        // The upload path casts &[Vertex] to bytes; reading those bytes back
        // must reproduce the literal array exactly.
        let vertices = [
            Vertex::new(0.5, 0.5, 0.0),
            Vertex::new(0.5, -0.5, 0.0),
            Vertex::new(-0.5, -0.5, 0.0),
            Vertex::new(-0.5, 0.5, 0.0),
        ];

        let bytes = bytemuck::cast_slice::<Vertex, u8>(&vertices);
        assert_eq!(bytes.len(), vertices.len() * Vertex::STRIDE as usize);

        let back: &[Vertex] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &vertices);
    }

    #[test]
    fn index_bytes_round_trip() {
        let indices: [u32; 6] = [0, 1, 3, 1, 2, 3];
        let bytes = bytemuck::cast_slice::<u32, u8>(&indices);
        let back: &[u32] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &indices);
    }
}
