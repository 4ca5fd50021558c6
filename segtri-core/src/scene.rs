/// Scene parameters and the plain-text scene description parser
use std::f32::consts::PI;
use std::str::FromStr;

use nalgebra::Vector3;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace1, not_line_ending},
    combinator::{all_consuming, map, map_res, recognize, value},
    multi::{many0, many0_count},
    number::complete::float,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use tracing::debug;

use crate::error::SceneError;
use crate::geometry::{Grid, Segment, Triangle, MAX_GRID_SUBDIVISION};
use crate::projection::{Camera, Viewport};
use crate::transform::Pose;
use crate::vector::{length, ZERO_LENGTH_EPSILON};

/// Everything one update cycle needs, owned by the caller and passed by
/// reference into the pipeline and the intersector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub segment: Segment,
    pub triangle: Triangle,
    pub object: Pose,
    pub camera: Camera,
    pub viewport: Viewport,
    pub grid: Grid,
}

impl SceneParams {
    /// Reject input the math core cannot handle before any matrix is built.
    pub fn validate(&self) -> Result<(), SceneError> {
        let diff_len = length(&self.segment.diff);
        if !diff_len.is_finite()
            || diff_len < ZERO_LENGTH_EPSILON
            || !self.segment.origin.iter().all(|c| c.is_finite())
        {
            return Err(SceneError::DegenerateSegment);
        }

        if !self.triangle.vertices.iter().flatten().all(|c| c.is_finite())
            || self.triangle.calculate_normal().is_err()
        {
            return Err(SceneError::DegenerateTriangle);
        }

        let camera = &self.camera;
        if !(camera.fov_y > 0.0 && camera.fov_y < PI) {
            return Err(SceneError::InvalidProjection {
                reason: format!("fov_y {} must be in (0, pi)", camera.fov_y),
            });
        }
        if !(camera.near > 0.0 && camera.far > camera.near && camera.far.is_finite()) {
            return Err(SceneError::InvalidProjection {
                reason: format!(
                    "need 0 < near < far, got near {} far {}",
                    camera.near, camera.far
                ),
            });
        }

        let viewport = &self.viewport;
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(viewport.width) || !positive(viewport.height) {
            return Err(SceneError::InvalidViewport {
                reason: format!(
                    "size {}x{} must be positive",
                    viewport.width, viewport.height
                ),
            });
        }

        let grid = &self.grid;
        if !positive(grid.half_width) {
            return Err(SceneError::InvalidGrid {
                reason: format!("half width {} must be positive", grid.half_width),
            });
        }
        if grid.subdivision > MAX_GRID_SUBDIVISION {
            return Err(SceneError::InvalidGrid {
                reason: format!(
                    "subdivision {} exceeds {MAX_GRID_SUBDIVISION}",
                    grid.subdivision
                ),
            });
        }

        Ok(())
    }

    fn apply(&mut self, statement: Statement) {
        match statement {
            Statement::Segment(segment) => self.segment = segment,
            Statement::Triangle(triangle) => self.triangle = triangle,
            Statement::Object(pose) => self.object = pose,
            Statement::Camera(pose) => self.camera.pose = pose,
            Statement::Projection { fov_y, near, far } => {
                self.camera.fov_y = fov_y;
                self.camera.near = near;
                self.camera.far = far;
            }
            Statement::Viewport(viewport) => self.viewport = viewport,
            Statement::Grid(grid) => self.grid = grid,
        }
    }
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            segment: Segment::new(Vector3::new(0.0, -1.0, 0.0), Vector3::new(1.0, 2.0, 2.0)),
            triangle: Triangle::new(
                Vector3::new(-1.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ),
            object: Pose::identity(),
            camera: Camera::default(),
            viewport: Viewport::default(),
            grid: Grid::default(),
        }
    }
}

impl FromStr for SceneParams {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scene(s)
    }
}

/// Parse a scene description on top of [`SceneParams::default`] and validate it.
///
/// ```text
/// # comments run to end of line
/// segment    0 -1 0   1 2 2          # origin, diff
/// triangle   -1 0 0   1 0 0   0 1 0
/// object     1 1 1   0 0 0   0 0 0   # scale, rotate, translate
/// camera     1 1 1   0.26 0 0   0 1.9 -6.49
/// projection 0.45 0.1 100            # fov_y, near, far
/// viewport   0 0 1280 720 0 1        # left, top, width, height, depth range
/// grid       2 10                    # half width, subdivision
/// ```
pub fn parse_scene(input: &str) -> Result<SceneParams, SceneError> {
    let statements = match all_consuming(terminated(many0(statement), skip))(input) {
        Ok((_, statements)) => statements,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(parse_error(input, e.input));
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(parse_error(input, ""));
        }
    };

    debug!(count = statements.len(), "parsed scene statements");
    let mut scene = SceneParams::default();
    for statement in statements {
        scene.apply(statement);
    }
    scene.validate()?;
    Ok(scene)
}

fn parse_error(input: &str, rest: &str) -> SceneError {
    let consumed = &input[..input.len() - rest.len()];
    let line = consumed.matches('\n').count() + 1;
    let near = rest.lines().next().unwrap_or("").trim();
    let message = if near.is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!("unrecognized or incomplete statement `{near}`")
    };
    SceneError::Parse { line, message }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Statement {
    Segment(Segment),
    Triangle(Triangle),
    Object(Pose),
    Camera(Pose),
    Projection { fov_y: f32, near: f32, far: f32 },
    Viewport(Viewport),
    Grid(Grid),
}

fn comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('#'), not_line_ending))(input)
}

/// Whitespace and comments.
fn skip(input: &str) -> IResult<&str, ()> {
    value((), many0_count(alt((multispace1, comment))))(input)
}

/// A statement keyword, which must be followed by whitespace.
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    preceded(skip, terminated(tag(word), multispace1))
}

fn number(input: &str) -> IResult<&str, f32> {
    preceded(skip, float)(input)
}

fn count(input: &str) -> IResult<&str, u32> {
    preceded(skip, map_res(digit1, u32::from_str))(input)
}

fn vec3(input: &str) -> IResult<&str, Vector3<f32>> {
    map(tuple((number, number, number)), |(x, y, z)| {
        Vector3::new(x, y, z)
    })(input)
}

fn pose(input: &str) -> IResult<&str, Pose> {
    map(tuple((vec3, vec3, vec3)), |(scale, rotate, translate)| {
        Pose::new(scale, rotate, translate)
    })(input)
}

fn statement(input: &str) -> IResult<&str, Statement> {
    alt((
        map(preceded(keyword("segment"), pair(vec3, vec3)), |(origin, diff)| {
            Statement::Segment(Segment::new(origin, diff))
        }),
        map(
            preceded(keyword("triangle"), tuple((vec3, vec3, vec3))),
            |(v0, v1, v2)| Statement::Triangle(Triangle::new(v0, v1, v2)),
        ),
        map(preceded(keyword("object"), pose), Statement::Object),
        map(preceded(keyword("camera"), pose), Statement::Camera),
        map(
            preceded(keyword("projection"), tuple((number, number, number))),
            |(fov_y, near, far)| Statement::Projection { fov_y, near, far },
        ),
        map(
            preceded(
                keyword("viewport"),
                tuple((number, number, number, number, number, number)),
            ),
            |(left, top, width, height, min_depth, max_depth)| {
                Statement::Viewport(Viewport {
                    left,
                    top,
                    width,
                    height,
                    min_depth,
                    max_depth,
                })
            },
        ),
        map(preceded(keyword("grid"), pair(number, count)), |(half_width, subdivision)| {
            Statement::Grid(Grid::new(half_width, subdivision))
        }),
    ))(input)
}
