//! Rampshade shader crate.
//!
//! This crate owns the heat-map shading program and everything a host needs
//! to wire it into a wgpu pipeline without guessing:
//! - the WGSL source and its entry point names (`shader`)
//! - the bind group / vertex layout contract and GPU records (`binding`)
//! - the CPU form of the bound scalar image (`texture`)
//! - a CPU reference of each shading stage, for testing the math (`stages`)

pub mod binding;
pub mod logging;
pub mod shader;
pub mod stages;
pub mod texture;
