use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

/// Smallest |det| accepted relative to the product of the column lengths.
///
/// Relative so that uniformly small (or large) scales stay invertible; only
/// collapsed or near-collinear axes are rejected.
const SINGULAR_EPSILON: f32 = 1e-6;

/// Uniform block as uploaded to binding 0.
///
/// WGSL lays out `mat3x3<f32>` as three `vec3` columns, each padded to 16
/// bytes, so the normal matrix occupies 48 bytes. Total size: 112 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct UniformBlock {
    pub mvp: [[f32; 4]; 4],                         // offset 0, column-major
    pub transpose_inverse_modelview: [[f32; 4]; 3], // offset 64, padded columns
}

/// CPU-side uniforms.
///
/// Invariant: `mvp` and `normal_matrix` come from the same model-view state.
/// The shader cannot check this; mismatched matrices shade normals wrongly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Uniforms {
    pub mvp: Mat4,
    pub normal_matrix: Mat3,
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::identity()
    }
}

impl Uniforms {
    #[inline]
    pub const fn new(mvp: Mat4, normal_matrix: Mat3) -> Self {
        Self { mvp, normal_matrix }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(Mat4::IDENTITY, Mat3::IDENTITY)
    }

    /// Builds consistent uniforms from camera and object transforms.
    ///
    /// `mvp = projection * view * model`; the normal matrix is the
    /// transpose-inverse of the upper-left 3x3 of `view * model`.
    ///
    /// Fails if that 3x3 block is singular (e.g. a zero scale axis).
    pub fn from_transforms(projection: Mat4, view: Mat4, model: Mat4) -> Result<Self> {
        let model_view = view * model;
        let normal_matrix = normal_matrix(model_view)?;
        Ok(Self::new(projection * model_view, normal_matrix))
    }

    /// Converts to the padded GPU layout.
    pub fn to_block(&self) -> UniformBlock {
        let pad = |c: glam::Vec3| [c.x, c.y, c.z, 0.0];
        UniformBlock {
            mvp: self.mvp.to_cols_array_2d(),
            transpose_inverse_modelview: [
                pad(self.normal_matrix.x_axis),
                pad(self.normal_matrix.y_axis),
                pad(self.normal_matrix.z_axis),
            ],
        }
    }
}

/// Transpose-inverse of the upper-left 3x3 block of `model_view`.
pub(crate) fn normal_matrix(model_view: Mat4) -> Result<Mat3> {
    let upper = Mat3::from_mat4(model_view);
    let det = upper.determinant();
    let volume = upper.x_axis.length() * upper.y_axis.length() * upper.z_axis.length();
    anyhow::ensure!(
        det.is_finite() && det != 0.0 && det.abs() > SINGULAR_EPSILON * volume,
        "model-view matrix is singular (det = {det}); normals cannot be transformed"
    );

    let normal = upper.inverse().transpose();
    anyhow::ensure!(
        normal.is_finite(),
        "normal matrix of model-view is not finite (det = {det})"
    );
    Ok(normal)
}
