//! Phong sphere scene: sampling, shading, and interactive state
//!
//! This crate holds everything between raw vector algebra and the
//! windowing layer. The sphere sampler produces the fixed point cloud
//! once at startup, the shader turns one surface point into one color,
//! and [`SceneState`] owns all the state the user mutates at runtime.
//!
//! # Modules
//!
//! - [`sampler`]: Fixed point-cloud generation for the sphere surface
//! - [`shader`]: The Phong lighting evaluation and the per-frame pass
//! - [`state`]: Light, material, coefficient, and selector state

pub mod sampler;
pub mod shader;
pub mod state;

pub use sampler::{expected_point_count, sample_sphere};
pub use shader::{shade_frame, shade_point, ShadedPoint};
pub use state::{Category, Channel, Coefficients, Material, ModeFlags, SceneState};
