/// Matrix4x4 algebra in the row-vector convention
///
/// Points are row vectors multiplied on the left, `p' = [x y z 1] * M`, so a
/// chain `A * B` applies `A` first. Translation lives in row 3.
use nalgebra::{Matrix4, RowVector4, Vector3};
use tracing::warn;

use crate::error::MathError;

/// Determinants with a smaller magnitude are treated as singular.
pub const SINGULAR_EPSILON: f32 = 1e-6;

/// Homogeneous w values with a smaller magnitude cannot be divided by.
pub const W_EPSILON: f32 = 1e-6;

pub fn identity() -> Matrix4<f32> {
    Matrix4::identity()
}

/// Standard 4x4 product. `multiply(a, b)` applies `a` before `b`.
pub fn multiply(a: &Matrix4<f32>, b: &Matrix4<f32>) -> Matrix4<f32> {
    a * b
}

/// General inverse.
///
/// Returns [`MathError::SingularMatrix`] when `|det(m)| < SINGULAR_EPSILON`
/// rather than a meaningless matrix.
pub fn inverse(m: &Matrix4<f32>) -> Result<Matrix4<f32>, MathError> {
    let determinant = m.determinant();
    if !determinant.is_finite() || determinant.abs() < SINGULAR_EPSILON {
        warn!(determinant, "refusing to invert singular matrix");
        return Err(MathError::SingularMatrix { determinant });
    }
    m.try_inverse()
        .ok_or(MathError::SingularMatrix { determinant })
}

/// Apply `m` to `point` as a homogeneous row vector and divide by w.
///
/// A w within `W_EPSILON` of zero (point at infinity or on the camera plane)
/// yields [`MathError::DegenerateProjection`].
pub fn transform(point: &Vector3<f32>, m: &Matrix4<f32>) -> Result<Vector3<f32>, MathError> {
    let h = RowVector4::new(point.x, point.y, point.z, 1.0) * m;
    let w = h[3];
    if !w.is_finite() || w.abs() < W_EPSILON {
        return Err(MathError::DegenerateProjection { w });
    }
    Ok(Vector3::new(h[0] / w, h[1] / w, h[2] / w))
}
