/// Segment–triangle intersection
///
/// The test intersects the segment with the triangle's plane and then checks
/// the hit point against each edge. The plane parameter `t` is a distance
/// along the unit direction of the segment, so it is bounded by the length of
/// the un-normalized `diff`.
use tracing::{debug, warn};

use crate::error::MathError;
use crate::geometry::{Segment, Triangle};
use crate::vector::{add, cross, dot, length, normalize, scale, subtract};

/// Below this `|normal . direction|` the segment is parallel to the plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Whether `segment` touches the closed region of `triangle`.
///
/// Segments parallel to the plane never collide, including ones lying inside
/// it. Degenerate input (collinear triangle, zero-length segment) is logged
/// and reported as no collision; use [`try_is_collision`] to observe it.
pub fn is_collision(triangle: &Triangle, segment: &Segment) -> bool {
    match try_is_collision(triangle, segment) {
        Ok(hit) => hit,
        Err(err) => {
            warn!(%err, "degenerate collision input");
            false
        }
    }
}

/// [`is_collision`] that surfaces degenerate input as [`MathError::DegenerateVector`].
pub fn try_is_collision(triangle: &Triangle, segment: &Segment) -> Result<bool, MathError> {
    let [v0, v1, v2] = triangle.vertices;

    let normal = triangle.calculate_normal()?;
    let direction = normalize(&segment.diff)?;

    let dot_nd = dot(&normal, &direction);
    if dot_nd.abs() < PARALLEL_EPSILON {
        debug!(dot_nd, "segment parallel to triangle plane");
        return Ok(false);
    }

    let t = dot(&normal, &subtract(&v0, &segment.origin)) / dot_nd;
    if t < 0.0 || t > length(&segment.diff) {
        debug!(t, "plane intersection outside segment");
        return Ok(false);
    }

    let point = add(&segment.origin, &scale(t, &direction));

    let edges = [(v0, v1), (v1, v2), (v2, v0)];
    let inside = edges.iter().all(|(start, end)| {
        let c = cross(&subtract(end, start), &subtract(&point, start));
        dot(&c, &normal) >= 0.0
    });

    debug!(t, inside, "segment crosses triangle plane");
    Ok(inside)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_segment_through_interior() {
        let segment = Segment::new(Vector3::new(0.0, 0.25, -1.0), Vector3::new(0.0, 0.0, 2.0));
        assert!(is_collision(&unit_triangle(), &segment));
    }

    #[test]
    fn test_segment_in_plane_is_parallel() {
        // Vertical segment inside the z = 0 plane, crossing the triangle.
        let segment = Segment::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(0.0, 2.0, 0.0));
        assert!(!is_collision(&unit_triangle(), &segment));
        assert_eq!(try_is_collision(&unit_triangle(), &segment), Ok(false));
    }

    #[test]
    fn test_parallel_offset_segment() {
        let segment = Segment::new(Vector3::new(-5.0, 0.2, 3.0), Vector3::new(10.0, 0.5, 0.0));
        assert!(!is_collision(&unit_triangle(), &segment));
    }

    #[test]
    fn test_outside_triangle() {
        let segment = Segment::new(Vector3::new(0.9, 0.9, -1.0), Vector3::new(0.0, 0.0, 2.0));
        assert!(!is_collision(&unit_triangle(), &segment));
    }

    #[test]
    fn test_segment_too_short() {
        let segment = Segment::new(Vector3::new(0.0, 0.25, -1.0), Vector3::new(0.0, 0.0, 0.5));
        assert!(!is_collision(&unit_triangle(), &segment));
    }

    #[test]
    fn test_plane_behind_origin() {
        let segment = Segment::new(Vector3::new(0.0, 0.25, 0.5), Vector3::new(0.0, 0.0, 1.0));
        assert!(!is_collision(&unit_triangle(), &segment));
    }

    #[test]
    fn test_inclusive_parameter_bounds() {
        let triangle = unit_triangle();
        // Ends exactly on the plane: t == |diff|.
        let ends_on_plane = Segment::new(Vector3::new(0.0, 0.25, -1.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(is_collision(&triangle, &ends_on_plane));
        // Starts exactly on the plane: t == 0.
        let starts_on_plane = Segment::new(Vector3::new(0.0, 0.25, 0.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(is_collision(&triangle, &starts_on_plane));
    }

    #[test]
    fn test_point_on_edge_counts_as_inside() {
        let segment = Segment::new(Vector3::new(0.5, 0.0, -1.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(is_collision(&unit_triangle(), &segment));
    }

    #[test]
    fn test_winding_does_not_change_result() {
        let [v0, v1, v2] = unit_triangle().vertices;
        let reversed = Triangle::new(v0, v2, v1);
        let hit = Segment::new(Vector3::new(0.1, 0.3, 1.0), Vector3::new(0.0, 0.0, -2.0));
        let miss = Segment::new(Vector3::new(-0.9, 0.9, 1.0), Vector3::new(0.0, 0.0, -2.0));
        assert!(is_collision(&reversed, &hit));
        assert!(!is_collision(&reversed, &miss));
    }

    #[test]
    fn test_oblique_segment() {
        // From (-1, 0.5, -2) to (1, 0, 2): crosses z = 0 at (0, 0.25, 0).
        let segment = Segment::from_endpoints(Vector3::new(-1.0, 0.5, -2.0), Vector3::new(1.0, 0.0, 2.0));
        assert!(is_collision(&unit_triangle(), &segment));
        assert!(is_collision(&unit_triangle(), &segment.reversed()));
    }

    #[test]
    fn test_default_scene_segment_misses() {
        // Starts on the plane at (0, -1, 0), below the triangle.
        let segment = Segment::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(1.0, 2.0, 2.0));
        assert!(!is_collision(&unit_triangle(), &segment));
    }

    #[test]
    fn test_degenerate_inputs() {
        let point = Segment::new(Vector3::new(0.0, 0.25, 0.0), Vector3::zeros());
        assert_eq!(
            try_is_collision(&unit_triangle(), &point),
            Err(MathError::DegenerateVector)
        );
        assert!(!is_collision(&unit_triangle(), &point));

        let sliver = Triangle::new(Vector3::zeros(), Vector3::x(), Vector3::x() * 2.0);
        let segment = Segment::new(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(try_is_collision(&sliver, &segment), Err(MathError::DegenerateVector));
    }
}
