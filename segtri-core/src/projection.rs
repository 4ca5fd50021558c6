/// Camera, perspective projection and viewport utilities
use nalgebra::{Matrix4, Vector3};

use crate::transform::Pose;

/// Left-handed perspective projection (depth mapped to `[0, 1]`).
///
/// `fov_y` is the vertical field of view in radians.
pub fn make_perspective_fov_matrix(fov_y: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    let cot = 1.0 / (fov_y / 2.0).tan();
    let depth = far - near;
    Matrix4::new(
        cot / aspect, 0.0, 0.0, 0.0, //
        0.0, cot, 0.0, 0.0, //
        0.0, 0.0, far / depth, 1.0, //
        0.0, 0.0, -near * far / depth, 0.0,
    )
}

/// Maps NDC to screen pixels, Y pointing down, and depth to
/// `[min_depth, max_depth]`.
pub fn make_viewport_matrix(
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    min_depth: f32,
    max_depth: f32,
) -> Matrix4<f32> {
    Matrix4::new(
        width / 2.0, 0.0, 0.0, 0.0, //
        0.0, -height / 2.0, 0.0, 0.0, //
        0.0, 0.0, max_depth - min_depth, 0.0, //
        left + width / 2.0, top + height / 2.0, min_depth, 1.0,
    )
}

/// Output surface rectangle and depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        make_viewport_matrix(
            self.left,
            self.top,
            self.width,
            self.height,
            self.min_depth,
            self.max_depth,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Camera pose plus perspective parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pose: Pose,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            fov_y: 0.45,
            near: 0.1,
            far: 100.0,
        }
    }

    /// The camera's placement in world space. The view matrix is its inverse.
    pub fn world_matrix(&self) -> Matrix4<f32> {
        self.pose.matrix()
    }

    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        make_perspective_fov_matrix(self.fov_y, aspect, self.near, self.far)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Pose::new(
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(0.26, 0.0, 0.0),
            Vector3::new(0.0, 1.9, -6.49),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::transform;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::default();
        assert!((camera.fov_y - 0.45).abs() < 1e-6);
        assert!((Viewport::default().aspect() - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn test_perspective_depth_range() {
        let m = make_perspective_fov_matrix(1.0, 1.5, 0.1, 100.0);
        let near = transform(&Vector3::new(0.0, 0.0, 0.1), &m).unwrap();
        let far = transform(&Vector3::new(0.0, 0.0, 100.0), &m).unwrap();
        assert_relative_eq!(near.z, 0.0, epsilon = 1e-5);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_frustum_edge_maps_to_ndc_one() {
        let fov_y = 0.8_f32;
        let m = make_perspective_fov_matrix(fov_y, 2.0, 0.1, 100.0);
        let z = 10.0;
        let top = z * (fov_y / 2.0).tan();
        let p = transform(&Vector3::new(2.0 * top, top, z), &m).unwrap();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_viewport_corners() {
        let m = Viewport::new(1280.0, 720.0).matrix();
        let top_left = transform(&Vector3::new(-1.0, 1.0, 0.0), &m).unwrap();
        let bottom_right = transform(&Vector3::new(1.0, -1.0, 1.0), &m).unwrap();
        assert_relative_eq!(top_left, Vector3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(bottom_right, Vector3::new(1280.0, 720.0, 1.0));
    }
}
