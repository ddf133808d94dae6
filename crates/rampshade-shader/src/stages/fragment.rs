use glam::{IVec2, Vec2, Vec3, Vec4};

use crate::texture::{ScalarImage, LOOKUP_EXTENT};

use super::Interpolated;

/// Divisor mapping a stored texel to the ramp input `v`.
pub const TEXEL_NORMALIZER: f32 = 255.0;

/// Per-channel slope of the color ramp: `rgb = 1 - slope * v`.
pub const RAMP_SLOPES: Vec3 = Vec3::new(5.0, 15.0, 50.0);

/// Integer texel coordinate for a texture coordinate.
///
/// Scales by [`LOOKUP_EXTENT`] and truncates toward zero, like a WGSL
/// `vec2<i32>(f32)` conversion. Coordinates outside `[0, 1)` land outside
/// the image.
#[inline]
pub fn lookup_coord(tex_coord: Vec2) -> IVec2 {
    (tex_coord * LOOKUP_EXTENT as f32).as_ivec2()
}

#[inline]
pub fn normalize_texel(texel: u32) -> f32 {
    texel as f32 / TEXEL_NORMALIZER
}

/// Heat-map ramp: `(1 - 5v, 1 - 15v, 1 - 50v, 1)`.
///
/// Non-increasing in `v` on every color channel. Components go negative for
/// larger `v`; clamping is left to the color attachment.
#[inline]
pub fn ramp(v: f32) -> Vec4 {
    (Vec3::ONE - RAMP_SLOPES * v).extend(1.0)
}

/// Mirrors `fs_main`.
///
/// Reads only `tex_coord` from the payload. Out-of-bounds fetches resolve to
/// texel 0, one of the results robust texture access allows.
pub fn heatmap_fragment(payload: &Interpolated, image: &ScalarImage) -> Vec4 {
    let coord = lookup_coord(payload.tex_coord);
    let texel = image.load(coord).unwrap_or_else(|| {
        log::trace!("heatmap fetch at {coord} is outside {}x{}", image.width(), image.height());
        0
    });
    ramp(normalize_texel(texel))
}

/// Final value a unorm color attachment stores for `color`.
#[inline]
pub fn resolve_to_attachment(color: Vec4) -> Vec4 {
    color.clamp(Vec4::ZERO, Vec4::ONE)
}
