//! Host-side binding contract.
//!
//! Everything here must agree bit-for-bit with the declarations in
//! `shaders/heatmap.wgsl`:
//! - group 0, binding 0: uniform block (mvp + transpose-inverse model-view)
//! - group 0, binding 1: 2D texture with an unsigned-integer first channel
//! - vertex locations 0/1/2: position / normal / tex_coord
//! - fragment output location 0: RGBA float color
//!
//! Creating buffers, bind groups and pipelines is left to the host; this
//! module only provides the records and layout descriptors.

mod layout;
mod uniforms;
mod vertex;

pub use layout::{
    bind_group_layout_entries, is_scalar_texture_format, uniform_min_binding_size, BIND_GROUP,
    COLOR_OUTPUT_LOCATION, SCALAR_TEXTURE_BINDING, SCALAR_TEXTURE_FORMAT, UNIFORM_BINDING,
};
pub use uniforms::{UniformBlock, Uniforms};
pub use vertex::Vertex;
