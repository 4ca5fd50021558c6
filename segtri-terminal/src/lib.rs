/// Terminal front end: computes one frame of a scene and reports it
use std::io::{self, stdout, Write};

use segtri_core::{Frame, SceneParams};
use tracing::info;

pub mod report;

pub use report::Report;

/// Headless application: one scene in, one report out
pub struct TerminalApp {
    scene: SceneParams,
    list_grid: bool,
}

impl TerminalApp {
    pub fn new(scene: SceneParams) -> Self {
        Self {
            scene,
            list_grid: false,
        }
    }

    pub fn list_grid(mut self, list_grid: bool) -> Self {
        self.list_grid = list_grid;
        self
    }

    pub fn scene_mut(&mut self) -> &mut SceneParams {
        &mut self.scene
    }

    /// Validate the current scene, compute its frame and write the report.
    pub fn render_to<W: Write>(&self, writer: &mut W) -> io::Result<Frame> {
        let frame = Frame::compute(&self.scene)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        info!(colliding = frame.colliding, "frame computed");

        Report::new(&frame)
            .with_grid_lines(self.list_grid)
            .draw(writer)?;
        writer.flush()?;
        Ok(frame)
    }

    pub fn run(&self) -> io::Result<Frame> {
        let mut stdout = stdout();
        self.render_to(&mut stdout)
    }
}
