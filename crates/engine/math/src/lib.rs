//! Vector algebra for the Phong viewer
//!
//! This crate contains the 3-component vector type and the elementary
//! operations the lighting model is built from. The same representation
//! serves as a spatial point, a direction, a unit vector, and an RGB
//! color depending on call context.
//!
//! # Modules
//!
//! - [`error`]: Error types for degenerate and invalid vector inputs
//! - [`vec3`]: The [`Vec3`] type and its operations

pub mod error;
pub mod vec3;

pub use error::{MathError, Result};
pub use vec3::{clamp_scalar, Vec3};
