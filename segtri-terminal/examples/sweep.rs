/// Example: slide the default segment across the triangle and print each verdict
///
/// Usage: cargo run --example sweep

use nalgebra::Vector3;
use segtri_core::{SceneParams, Segment};
use segtri_terminal::TerminalApp;
use std::io;

fn main() -> io::Result<()> {
    let mut app = TerminalApp::new(SceneParams::default());

    for step in 0..=8 {
        let x = -1.2 + 0.3 * step as f32;
        *app.scene_mut() = SceneParams {
            segment: Segment::new(Vector3::new(x, 0.3, -1.0), Vector3::new(0.0, 0.0, 2.0)),
            ..SceneParams::default()
        };

        println!("-- x = {x:.1}");
        app.run()?;
    }

    Ok(())
}
