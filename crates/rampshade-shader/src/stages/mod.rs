//! CPU reference of the shading stages.
//!
//! Each function mirrors one entry point of `shaders/heatmap.wgsl` so the
//! transform and ramp math can be tested without a GPU. Every stage is a
//! pure function of its inputs; none of them can fail. Degenerate inputs
//! (w = 0, out-of-range texture coordinates) give numerically undefined or
//! clamped results exactly where the GPU would.

mod fragment;
mod interpolated;
mod vertex;
mod wireframe;

pub use fragment::{
    heatmap_fragment, lookup_coord, normalize_texel, ramp, resolve_to_attachment, RAMP_SLOPES,
    TEXEL_NORMALIZER,
};
pub use interpolated::Interpolated;
pub use vertex::vertex_stage;
pub use wireframe::{wireframe_fragment, WIREFRAME_COLOR};
