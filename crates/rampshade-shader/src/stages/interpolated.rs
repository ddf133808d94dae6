use glam::{Vec2, Vec3, Vec4};

/// Vertex stage output, interpolated by the rasterizer before the fragment
/// stage sees it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Interpolated {
    /// Passed through unchanged from the vertex.
    pub tex_coord: Vec2,
    /// Transformed by the normal matrix, not renormalized.
    pub normal: Vec3,
    /// Normalized device position (`position.xyz / position.w`).
    ///
    /// Part of the inter-stage interface but read by neither fragment entry
    /// point. Kept so the WGSL struct and this record stay in sync.
    pub norpos: Vec3,
    /// Clip-space position.
    pub position: Vec4,
}
