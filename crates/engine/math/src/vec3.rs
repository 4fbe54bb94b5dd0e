//! The 3-component vector type and its operations
//!
//! Componentwise arithmetic is total and implemented through the
//! standard operator traits. Normalization is the one fallible
//! operation: it rejects zero-length input and input with non-finite
//! components as explicit errors instead of producing NaN components.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use crate::error::{MathError, Result};

/// A 3-component vector
///
/// Used interchangeably as a spatial point, a direction, a unit vector,
/// or an RGB color; which role applies is determined by call context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Clamp a scalar to `[lo, hi]`
///
/// `lo <= hi` is a precondition.
pub fn clamp_scalar(a: f32, lo: f32, hi: f32) -> f32 {
    debug_assert!(lo <= hi);
    if a > hi {
        hi
    } else if a < lo {
        lo
    } else {
        a
    }
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create a vector with all components set to `v`
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// True if every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean magnitude
    pub fn magnitude(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Standard inner product
    pub fn dot(&self, other: &Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Multiply every component by a constant
    pub fn mul_scalar(&self, a: f32) -> Self {
        Self::new(self.x * a, self.y * a, self.z * a)
    }

    /// Add a constant to every component
    pub fn add_scalar(&self, a: f32) -> Self {
        Self::new(self.x + a, self.y + a, self.z + a)
    }

    /// Clamp each component independently to `[lo, hi]`
    ///
    /// `lo <= hi` is a precondition.
    pub fn clamp(&self, lo: f32, hi: f32) -> Self {
        Self::new(
            clamp_scalar(self.x, lo, hi),
            clamp_scalar(self.y, lo, hi),
            clamp_scalar(self.z, lo, hi),
        )
    }

    /// Normalize to unit length
    ///
    /// Returns [`MathError::InvalidArgument`] if any component is
    /// non-finite and [`MathError::DegenerateVector`] for zero-length
    /// input. Callers that hold a structurally non-zero vector (a point
    /// on a sphere of positive radius, say) may `?` this without ever
    /// observing the error.
    pub fn try_normalize(&self) -> Result<Vec3> {
        if !self.is_finite() {
            return Err(MathError::InvalidArgument);
        }
        let s = self.magnitude();
        if s == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(Self::new(self.x / s, self.y / s, self.z / s))
    }

    /// Mirror of `self` about `normal`: `2 * dot(self, n) * n - self`
    ///
    /// `normal` is expected to be unit length. Lighting code re-negates
    /// and re-normalizes the result as its orientation convention
    /// requires.
    pub fn reflect(&self, normal: &Vec3) -> Self {
        let d = self.dot(normal) * 2.0;
        normal.mul_scalar(d) - *self
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, a: f32) -> Vec3 {
        self.mul_scalar(a)
    }
}
