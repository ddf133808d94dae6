use glam::{Vec2, Vec3, Vec4};

use crate::binding::{Uniforms, Vertex};

use super::Interpolated;

/// Mirrors `vs_main`.
///
/// The normal goes through the transpose-inverse model-view (no
/// renormalization). With `w == 0` the perspective divide yields non-finite
/// components; valid projective geometry is the caller's responsibility.
pub fn vertex_stage(uniforms: &Uniforms, vertex: &Vertex) -> Interpolated {
    let normal = uniforms.normal_matrix * Vec3::from_array(vertex.normal);
    let position = uniforms.mvp * Vec4::from_array(vertex.position);
    let norpos = position.truncate() / position.w;

    Interpolated {
        tex_coord: Vec2::from_array(vertex.tex_coord),
        normal,
        norpos,
        position,
    }
}
