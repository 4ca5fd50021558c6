/// Vector3 algebra over `nalgebra::Vector3<f32>`
///
/// Points and free vectors share the same type.
use nalgebra::Vector3;

use crate::error::MathError;

/// Lengths below this are treated as zero by [`normalize`].
pub const ZERO_LENGTH_EPSILON: f32 = 1e-6;

pub fn add(a: &Vector3<f32>, b: &Vector3<f32>) -> Vector3<f32> {
    a + b
}

pub fn subtract(a: &Vector3<f32>, b: &Vector3<f32>) -> Vector3<f32> {
    a - b
}

pub fn scale(scalar: f32, v: &Vector3<f32>) -> Vector3<f32> {
    v * scalar
}

pub fn dot(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    a.dot(b)
}

/// Right-handed cross product. Its sign fixes triangle normal orientation.
pub fn cross(a: &Vector3<f32>, b: &Vector3<f32>) -> Vector3<f32> {
    a.cross(b)
}

pub fn length(v: &Vector3<f32>) -> f32 {
    v.norm()
}

/// Unit vector in the direction of `v`.
///
/// Fails with [`MathError::DegenerateVector`] instead of producing NaN when
/// `v` has (near) zero length or non-finite components.
pub fn normalize(v: &Vector3<f32>) -> Result<Vector3<f32>, MathError> {
    let len = length(v);
    if !len.is_finite() || len < ZERO_LENGTH_EPSILON {
        return Err(MathError::DegenerateVector);
    }
    Ok(v / len)
}
