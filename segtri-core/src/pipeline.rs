/// Per-cycle world -> view -> projection -> viewport composition
use nalgebra::{Matrix4, Vector3};
use tracing::debug;

use crate::collision::try_is_collision;
use crate::error::{MathError, SceneError};
use crate::matrix::{inverse, multiply, transform};
use crate::scene::SceneParams;

/// Packed RGBA colour of the reference grid.
pub const GRID_COLOR: u32 = 0x6F6F_6FFF;
/// Packed RGBA colour of the triangle, and of the segment when it misses.
pub const IDLE_COLOR: u32 = 0xFFFF_FFFF;
/// Packed RGBA colour of the segment while it hits the triangle.
pub const HIT_COLOR: u32 = 0xFF00_00FF;

/// The two matrices a renderer needs to reach screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    pub view_projection: Matrix4<f32>,
    pub viewport: Matrix4<f32>,
}

impl ScreenTransform {
    /// `view_projection * viewport`
    pub fn screen_matrix(&self) -> Matrix4<f32> {
        multiply(&self.view_projection, &self.viewport)
    }

    /// World-space point to normalized device coordinates.
    pub fn to_ndc(&self, point: &Vector3<f32>) -> Result<Vector3<f32>, MathError> {
        transform(point, &self.view_projection)
    }

    /// World-space point to screen pixels and depth.
    pub fn to_screen(&self, point: &Vector3<f32>) -> Result<Vector3<f32>, MathError> {
        transform(point, &self.screen_matrix())
    }
}

/// Build this cycle's matrices from the scene.
///
/// `view_projection = inverse(world) * inverse(camera) * projection`; the
/// order is fixed.
pub fn compute_screen_transform(scene: &SceneParams) -> Result<ScreenTransform, MathError> {
    let world = scene.object.matrix();
    let camera = scene.camera.world_matrix();

    let view_world = inverse(&world)?;
    let view_camera = inverse(&camera)?;
    let projection = scene.camera.projection_matrix(scene.viewport.aspect());

    let view_projection = multiply(&view_world, &multiply(&view_camera, &projection));
    let viewport = scene.viewport.matrix();

    debug!(
        fov_y = scene.camera.fov_y,
        aspect = scene.viewport.aspect(),
        "composed view-projection and viewport matrices"
    );

    Ok(ScreenTransform {
        view_projection,
        viewport,
    })
}

/// Screen-space primitives and the collision result for one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub transform: ScreenTransform,
    /// Segment start and end.
    pub segment: [Vector3<f32>; 2],
    pub triangle: [Vector3<f32>; 3],
    pub grid: Vec<[Vector3<f32>; 2]>,
    pub colliding: bool,
}

impl Frame {
    /// Validate `scene` and recompute everything from it. Nothing is cached
    /// between calls.
    ///
    /// Grid lines with an endpoint that cannot be projected are left out; the
    /// segment and triangle must project.
    pub fn compute(scene: &SceneParams) -> Result<Self, SceneError> {
        scene.validate()?;

        // The intersector works in world space, independent of the matrices.
        let colliding = try_is_collision(&scene.triangle, &scene.segment)?;

        let screen = compute_screen_transform(scene)?;
        let matrix = screen.screen_matrix();
        let project = |p: &Vector3<f32>| transform(p, &matrix);

        let segment = [
            project(&scene.segment.origin)?,
            project(&scene.segment.end())?,
        ];

        let [v0, v1, v2] = scene.triangle.vertices;
        let triangle = [project(&v0)?, project(&v1)?, project(&v2)?];

        let lines = scene.grid.lines();
        let total = lines.len();
        let grid: Vec<_> = lines
            .iter()
            .filter_map(|[start, end]| Some([project(start).ok()?, project(end).ok()?]))
            .collect();
        if grid.len() < total {
            debug!(dropped = total - grid.len(), "grid lines not projectable");
        }

        Ok(Self {
            transform: screen,
            segment,
            triangle,
            grid,
            colliding,
        })
    }

    pub fn segment_color(&self) -> u32 {
        if self.colliding {
            HIT_COLOR
        } else {
            IDLE_COLOR
        }
    }

    pub fn triangle_color(&self) -> u32 {
        IDLE_COLOR
    }

    pub fn grid_color(&self) -> u32 {
        GRID_COLOR
    }
}
