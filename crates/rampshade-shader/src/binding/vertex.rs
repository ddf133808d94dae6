use bytemuck::{Pod, Zeroable};

/// Per-vertex attributes as laid out in the vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4], // homogeneous, w = 1 for points
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2], // 0..1 maps onto the 256x256 scalar texture
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x4, // position
        1 => Float32x3, // normal
        2 => Float32x2  // tex_coord
    ];

    /// Creates a vertex for a point (`w = 1`).
    #[inline]
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position: [position[0], position[1], position[2], 1.0],
            normal,
            tex_coord,
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
