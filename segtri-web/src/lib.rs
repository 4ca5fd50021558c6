/// segtri web - WASM bindings for a JavaScript host renderer
///
/// The host owns the canvas and the controls. It pushes scene edits in, calls
/// `compute` once per animation frame, and draws the flat coordinate arrays.

use nalgebra::Vector3;
use segtri_core::{Frame, SceneError, SceneParams, Segment, Triangle};
use wasm_bindgen::prelude::*;

fn flatten_xy(points: &[Vector3<f32>]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

#[wasm_bindgen]
pub struct WebScene {
    scene: SceneParams,
    frame: Option<Frame>,
}

#[wasm_bindgen]
impl WebScene {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebScene {
        WebScene {
            scene: SceneParams::default(),
            frame: None,
        }
    }

    /// Build a scene from the plain-text scene description format.
    pub fn parse(text: &str) -> Result<WebScene, JsValue> {
        let scene = segtri_core::parse_scene(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebScene { scene, frame: None })
    }

    pub fn set_segment(&mut self, ox: f32, oy: f32, oz: f32, dx: f32, dy: f32, dz: f32) {
        self.scene.segment = Segment::new(Vector3::new(ox, oy, oz), Vector3::new(dx, dy, dz));
    }

    /// Nine floats: x, y, z of each vertex in winding order.
    pub fn set_triangle(&mut self, vertices: &[f32]) -> Result<(), JsValue> {
        if vertices.len() != 9 {
            return Err(JsValue::from_str("triangle needs exactly 9 coordinates"));
        }
        let v = |i: usize| Vector3::new(vertices[i], vertices[i + 1], vertices[i + 2]);
        self.scene.triangle = Triangle::new(v(0), v(3), v(6));
        Ok(())
    }

    pub fn set_object_rotate(&mut self, x: f32, y: f32, z: f32) {
        self.scene.object.rotate = Vector3::new(x, y, z);
    }

    pub fn set_camera(&mut self, rx: f32, ry: f32, rz: f32, tx: f32, ty: f32, tz: f32) {
        self.scene.camera.pose.rotate = Vector3::new(rx, ry, rz);
        self.scene.camera.pose.translate = Vector3::new(tx, ty, tz);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.scene.viewport.width = width;
        self.scene.viewport.height = height;
    }

    pub fn is_collision(&self) -> bool {
        segtri_core::is_collision(&self.scene.triangle, &self.scene.segment)
    }

    /// Validate the current scene state and recompute the frame.
    pub fn compute(&mut self) -> Result<(), JsValue> {
        self.compute_frame()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `[x0, y0, x1, y1]` of the segment in pixels.
    pub fn segment_points(&self) -> Vec<f32> {
        self.frame
            .as_ref()
            .map(|f| flatten_xy(&f.segment))
            .unwrap_or_default()
    }

    /// `[x0, y0, x1, y1, x2, y2]` of the triangle in pixels.
    pub fn triangle_points(&self) -> Vec<f32> {
        self.frame
            .as_ref()
            .map(|f| flatten_xy(&f.triangle))
            .unwrap_or_default()
    }

    /// Four floats per grid line.
    pub fn grid_points(&self) -> Vec<f32> {
        self.frame
            .as_ref()
            .map(|f| f.grid.iter().flat_map(|line| flatten_xy(line)).collect())
            .unwrap_or_default()
    }

    /// Packed RGBA for the segment: red on collision, white otherwise.
    pub fn segment_color(&self) -> u32 {
        self.frame
            .as_ref()
            .map_or(segtri_core::pipeline::IDLE_COLOR, Frame::segment_color)
    }
}

impl WebScene {
    fn compute_frame(&mut self) -> Result<(), SceneError> {
        self.frame = None;
        self.frame = Some(Frame::compute(&self.scene)?);
        Ok(())
    }
}

impl Default for WebScene {
    fn default() -> Self {
        Self::new()
    }
}
