/// Geometry primitives for the intersection test and the reference grid
use nalgebra::Vector3;

use crate::error::MathError;
use crate::vector::{cross, normalize};

/// A bounded line from `origin` to `origin + diff`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub origin: Vector3<f32>,
    pub diff: Vector3<f32>,
}

impl Segment {
    pub fn new(origin: Vector3<f32>, diff: Vector3<f32>) -> Self {
        Self { origin, diff }
    }

    pub fn from_endpoints(start: Vector3<f32>, end: Vector3<f32>) -> Self {
        Self {
            origin: start,
            diff: end - start,
        }
    }

    pub fn end(&self) -> Vector3<f32> {
        self.origin + self.diff
    }

    /// The same segment traversed from the other endpoint.
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.end(),
            diff: -self.diff,
        }
    }
}

/// A triangle; winding order decides which side the normal faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vector3<f32>; 3],
}

impl Triangle {
    pub fn new(v0: Vector3<f32>, v1: Vector3<f32>, v2: Vector3<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Un-normalized `(v1 - v0) x (v2 - v0)`
    pub fn cross_normal(&self) -> Vector3<f32> {
        let [v0, v1, v2] = self.vertices;
        cross(&(v1 - v0), &(v2 - v0))
    }

    /// Unit face normal. Fails for collinear vertices.
    pub fn calculate_normal(&self) -> Result<Vector3<f32>, MathError> {
        normalize(&self.cross_normal())
    }
}

/// Largest grid subdivision a scene may ask for.
pub const MAX_GRID_SUBDIVISION: u32 = 1000;

/// A square grid of lines on the XZ plane centred at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub half_width: f32,
    pub subdivision: u32,
}

impl Grid {
    pub fn new(half_width: f32, subdivision: u32) -> Self {
        Self {
            half_width,
            subdivision,
        }
    }

    /// World-space line endpoints: first the lines parallel to Z, then those
    /// parallel to X, `subdivision + 1` of each.
    pub fn lines(&self) -> Vec<[Vector3<f32>; 2]> {
        let half = self.half_width;
        let every = (half * 2.0) / self.subdivision.max(1) as f32;
        let count = self.subdivision as usize + 1;
        let mut lines = Vec::with_capacity(count * 2);

        for index in 0..=self.subdivision {
            let x = -half + every * index as f32;
            lines.push([Vector3::new(x, 0.0, -half), Vector3::new(x, 0.0, half)]);
        }
        for index in 0..=self.subdivision {
            let z = -half + every * index as f32;
            lines.push([Vector3::new(-half, 0.0, z), Vector3::new(half, 0.0, z)]);
        }

        lines
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(2.0, 10)
    }
}
