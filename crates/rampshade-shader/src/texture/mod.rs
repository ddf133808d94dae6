//! Bound image resource, CPU form.
//!
//! The heat-map fragment stage fetches texels by integer coordinate from a
//! 2D grid of unsigned integers. Only the first channel is read, so the CPU
//! form stores one `u32` per texel.

mod scalar_image;

pub use scalar_image::{ScalarImage, LOOKUP_EXTENT};
