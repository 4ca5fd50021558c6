/// Affine transformation matrices and object/camera pose state
use nalgebra::{Matrix4, Vector3};

/// Scale, Euler rotation (radians, applied X then Y then Z) and translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale: Vector3<f32>,
    pub rotate: Vector3<f32>,
    pub translate: Vector3<f32>,
}

impl Pose {
    pub fn new(scale: Vector3<f32>, rotate: Vector3<f32>, translate: Vector3<f32>) -> Self {
        Self {
            scale,
            rotate,
            translate,
        }
    }

    pub fn identity() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotate: Vector3::zeros(),
            translate: Vector3::zeros(),
        }
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        make_affine_matrix(&self.scale, &self.rotate, &self.translate)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

pub fn make_scale_matrix(scale: &Vector3<f32>) -> Matrix4<f32> {
    Matrix4::new_nonuniform_scaling(scale)
}

pub fn make_translate_matrix(translate: &Vector3<f32>) -> Matrix4<f32> {
    let mut m = Matrix4::identity();
    m[(3, 0)] = translate.x;
    m[(3, 1)] = translate.y;
    m[(3, 2)] = translate.z;
    m
}

pub fn make_rotate_x_matrix(radian: f32) -> Matrix4<f32> {
    let (s, c) = radian.sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, s, 0.0, //
        0.0, -s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn make_rotate_y_matrix(radian: f32) -> Matrix4<f32> {
    let (s, c) = radian.sin_cos();
    Matrix4::new(
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

pub fn make_rotate_z_matrix(radian: f32) -> Matrix4<f32> {
    let (s, c) = radian.sin_cos();
    Matrix4::new(
        c, s, 0.0, 0.0, //
        -s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Composite `X * Y * Z` rotation.
pub fn make_rotate_matrix(rotate: &Vector3<f32>) -> Matrix4<f32> {
    make_rotate_x_matrix(rotate.x) * make_rotate_y_matrix(rotate.y) * make_rotate_z_matrix(rotate.z)
}

/// Scale, then rotate, then translate: `S * R * T`.
pub fn make_affine_matrix(
    scale: &Vector3<f32>,
    rotate: &Vector3<f32>,
    translate: &Vector3<f32>,
) -> Matrix4<f32> {
    make_scale_matrix(scale) * make_rotate_matrix(rotate) * make_translate_matrix(translate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{inverse, transform};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_pose() {
        let matrix = Pose::identity().matrix();
        assert_relative_eq!(matrix, Matrix4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_rotations_follow_row_vector_convention() {
        let x = Vector3::x();
        let y = Vector3::y();
        let z = Vector3::z();

        // +Y turns toward +Z about X, +Z toward +X about Y, +X toward +Y about Z.
        let p = transform(&y, &make_rotate_x_matrix(FRAC_PI_2)).unwrap();
        assert_relative_eq!(p, z, epsilon = 1e-6);
        let p = transform(&z, &make_rotate_y_matrix(FRAC_PI_2)).unwrap();
        assert_relative_eq!(p, x, epsilon = 1e-6);
        let p = transform(&x, &make_rotate_z_matrix(FRAC_PI_2)).unwrap();
        assert_relative_eq!(p, y, epsilon = 1e-6);
    }

    #[test]
    fn test_affine_scales_before_translating() {
        let m = make_affine_matrix(
            &Vector3::new(2.0, 2.0, 2.0),
            &Vector3::zeros(),
            &Vector3::new(1.0, 0.0, 0.0),
        );
        let p = transform(&Vector3::new(1.0, 1.0, 1.0), &m).unwrap();
        assert_relative_eq!(p, Vector3::new(3.0, 2.0, 2.0), epsilon = 1e-6);
    }

    #[test]
    fn test_affine_inverse_round_trip() {
        let m = make_affine_matrix(
            &Vector3::new(1.5, 0.5, 2.0),
            &Vector3::new(0.3, -1.2, 0.7),
            &Vector3::new(4.0, -1.0, 2.5),
        );
        let inv = inverse(&m).unwrap();
        let p = Vector3::new(0.25, -3.0, 1.0);
        let back = transform(&transform(&p, &m).unwrap(), &inv).unwrap();
        assert_relative_eq!(back, p, epsilon = 1e-4);
    }
}
