/// segtri core - segment–triangle intersection and the transform pipeline
///
/// This library provides the stateless math behind the segment/triangle
/// visualisation: vector and matrix algebra in the row-vector convention, the
/// collision predicate, the scene description format, and the per-cycle
/// world -> screen composition handed to an external renderer.

pub mod collision;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod pipeline;
pub mod projection;
pub mod scene;
pub mod transform;
pub mod vector;

// Re-export commonly used types
pub use collision::{is_collision, try_is_collision};
pub use error::{MathError, SceneError};
pub use geometry::{Grid, Segment, Triangle};
pub use matrix::{inverse, multiply, transform};
pub use pipeline::{compute_screen_transform, Frame, ScreenTransform};
pub use projection::{make_perspective_fov_matrix, make_viewport_matrix, Camera, Viewport};
pub use scene::{parse_scene, SceneParams};
pub use transform::{make_affine_matrix, Pose};
