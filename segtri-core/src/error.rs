/// Error types for the math core and scene loading
use thiserror::Error;

/// Failures of the vector and matrix primitives.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MathError {
    /// `inverse` was given a matrix whose determinant is too close to zero.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f32 },

    /// `normalize` was given a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// The homogeneous w of a transformed point was zero or near zero.
    #[error("degenerate projection: w = {w}")]
    DegenerateProjection { w: f32 },
}

/// Failures while reading or validating a scene description.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("scene parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("segment diff has zero length")]
    DegenerateSegment,

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    #[error("invalid projection: {reason}")]
    InvalidProjection { reason: String },

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },

    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    #[error(transparent)]
    Math(#[from] MathError),
}
