use glam::Vec4;

/// Translucent green used for wireframe overlays.
pub const WIREFRAME_COLOR: Vec4 = Vec4::new(0.0, 0.5, 0.0, 0.5);

/// Mirrors `fs_wireframe`. Takes no per-fragment input.
#[inline]
pub fn wireframe_fragment() -> Vec4 {
    WIREFRAME_COLOR
}
