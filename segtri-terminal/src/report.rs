/// Colour-coded text report of one computed frame
use std::io::Write;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Vector3;
use segtri_core::Frame;

/// Convert a packed `0xRRGGBBAA` colour to a terminal colour. Alpha is ignored.
pub fn packed_to_color(rgba: u32) -> Color {
    Color::Rgb {
        r: (rgba >> 24) as u8,
        g: (rgba >> 16) as u8,
        b: (rgba >> 8) as u8,
    }
}

/// Writes screen-space coordinates and the collision verdict
pub struct Report<'a> {
    frame: &'a Frame,
    list_grid: bool,
}

impl<'a> Report<'a> {
    pub fn new(frame: &'a Frame) -> Self {
        Self {
            frame,
            list_grid: false,
        }
    }

    /// List every grid line instead of only their count.
    pub fn with_grid_lines(mut self, list_grid: bool) -> Self {
        self.list_grid = list_grid;
        self
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let frame = self.frame;

        writer.queue(SetForegroundColor(packed_to_color(frame.segment_color())))?;
        writer.queue(Print(format!(
            "segment   {} -> {}\n",
            point(&frame.segment[0]),
            point(&frame.segment[1])
        )))?;

        writer.queue(SetForegroundColor(packed_to_color(frame.triangle_color())))?;
        let [v0, v1, v2] = &frame.triangle;
        writer.queue(Print(format!(
            "triangle  {} {} {}\n",
            point(v0),
            point(v1),
            point(v2)
        )))?;

        writer.queue(SetForegroundColor(packed_to_color(frame.grid_color())))?;
        writer.queue(Print(format!("grid      {} lines\n", frame.grid.len())))?;
        if self.list_grid {
            for [start, end] in &frame.grid {
                writer.queue(Print(format!("  {} -> {}\n", point(start), point(end))))?;
            }
        }

        let verdict = if frame.colliding { "HIT" } else { "MISS" };
        writer.queue(SetForegroundColor(packed_to_color(frame.segment_color())))?;
        writer.queue(Print(format!("collision {verdict}\n")))?;
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn point(p: &Vector3<f32>) -> String {
    format!("({:.1}, {:.1} | {:.4})", p.x, p.y, p.z)
}
