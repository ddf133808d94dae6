use super::UniformBlock;

pub const BIND_GROUP: u32 = 0;
pub const UNIFORM_BINDING: u32 = 0;
pub const SCALAR_TEXTURE_BINDING: u32 = 1;

/// Fragment output location of both fragment entry points.
pub const COLOR_OUTPUT_LOCATION: u32 = 0;

/// Format matching [`crate::texture::ScalarImage`] storage (one `u32` per texel).
pub const SCALAR_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::R32Uint;

/// Returns the `wgpu` minimum binding size for the uniform buffer.
///
/// `UniformBlock` is 112 bytes so its size is always non-zero.
pub fn uniform_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<UniformBlock>() as u64)
        .expect("UniformBlock has non-zero size by construction")
}

/// Layout entries for bind group 0.
///
/// - binding 0: uniform block, read by the vertex stage
/// - binding 1: `texture_2d<u32>`, read by the heat-map fragment stage
pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 2] {
    [
        wgpu::BindGroupLayoutEntry {
            binding: UNIFORM_BINDING,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(uniform_min_binding_size()),
            },
            count: None,
        },
        wgpu::BindGroupLayoutEntry {
            binding: SCALAR_TEXTURE_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Uint,
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        },
    ]
}

/// Whether `format` can back the scalar texture binding.
///
/// Any unsigned-integer color format works; only the first channel is read.
pub fn is_scalar_texture_format(format: wgpu::TextureFormat) -> bool {
    use wgpu::TextureFormat as F;
    matches!(
        format,
        F::R8Uint
            | F::R16Uint
            | F::R32Uint
            | F::Rg8Uint
            | F::Rg16Uint
            | F::Rg32Uint
            | F::Rgba8Uint
            | F::Rgba16Uint
            | F::Rgba32Uint
            | F::Rgb10a2Uint
    )
}
