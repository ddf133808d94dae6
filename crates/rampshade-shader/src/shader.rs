//! The heat-map shading program.
//!
//! One WGSL module with three entry points: a vertex transform and two
//! fragment variants. The host references entry points by name when it
//! builds pipeline state, and picks one fragment variant per pipeline.

/// WGSL source of the shading program.
pub const SHADER_SOURCE: &str = include_str!("shaders/heatmap.wgsl");

/// Vertex stage: clip-space transform and attribute pass-through.
pub const VERTEX_ENTRY_POINT: &str = "vs_main";

/// Primary fragment stage: samples the scalar texture through the color ramp.
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";

/// Wireframe fragment stage: constant translucent green.
pub const WIREFRAME_ENTRY_POINT: &str = "fs_wireframe";

/// Fragment entry point selection.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FragmentVariant {
    /// Filled surface, colored from the scalar texture.
    #[default]
    Heatmap,
    /// Edge overlay, constant color. Reads no per-fragment input.
    Wireframe,
}

impl FragmentVariant {
    #[inline]
    pub const fn entry_point(self) -> &'static str {
        match self {
            FragmentVariant::Heatmap => FRAGMENT_ENTRY_POINT,
            FragmentVariant::Wireframe => WIREFRAME_ENTRY_POINT,
        }
    }

    /// Whether this variant reads the bound scalar texture.
    #[inline]
    pub const fn samples_texture(self) -> bool {
        matches!(self, FragmentVariant::Heatmap)
    }
}

/// Returns a descriptor for `wgpu::Device::create_shader_module`.
pub fn shader_module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    log::debug!("heatmap shader module requested ({} bytes of WGSL)", SHADER_SOURCE.len());
    wgpu::ShaderModuleDescriptor {
        label: Some("rampshade heatmap shader"),
        source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
    }
}
