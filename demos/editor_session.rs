use std::path::Path;

use bezier_sketch::{
    ClickOutcome, ControlPointSequence, Editor, Renderer, SampleBuffer, SketchConfig,
};

/// Prints a summary of every frame instead of drawing it.
struct ConsoleRenderer {
    frame: usize,
}

impl Renderer for ConsoleRenderer {
    fn draw(&mut self, control_points: &ControlPointSequence, curve: &SampleBuffer) {
        self.frame += 1;
        let ends = match (curve.first(), curve.last()) {
            (Some(a), Some(b)) => format!(
                "({:.3}, {:.3}) .. ({:.3}, {:.3})",
                a.x(),
                a.y(),
                b.x(),
                b.y()
            ),
            _ => String::from("empty"),
        };
        println!(
            "frame {:>2}: {} control points, {} samples, {}",
            self.frame,
            control_points.len(),
            curve.len(),
            ends
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // pass a TOML file to override the defaults, e.g. `cargo run --example editor_session sketch.toml`
    let config = match std::env::args().nth(1) {
        Some(path) => SketchConfig::load_from_file(Path::new(&path)),
        None => SketchConfig::default(),
    };
    let mut editor = Editor::new(config)?;
    let mut renderer = ConsoleRenderer { frame: 0 };

    // add a first segment, grab its second control point and drop it elsewhere
    let clicks = [
        (100.0, 500.0),
        (200.0, 150.0),
        (400.0, 150.0),
        (540.0, 500.0),
        (200.0, 150.0),
        (260.0, 60.0),
    ];
    for &(px, py) in clicks.iter() {
        match editor.click(px, py) {
            ClickOutcome::Added(i) => println!("click ({}, {}): added point {}", px, py, i),
            ClickOutcome::Picked(i) => println!("click ({}, {}): picked point {}", px, py, i),
            ClickOutcome::Moved(i) => println!("click ({}, {}): moved point {}", px, py, i),
        }
        editor.render_frame(&mut renderer);
    }

    Ok(())
}
