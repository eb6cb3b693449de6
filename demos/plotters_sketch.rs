extern crate plotters;
use plotters::prelude::*;

use bezier_sketch::{
    ControlPointSequence, CurveMode, Editor, Renderer, SampleBuffer, SketchConfig,
};

/// Collects each frame as plain (x, y) tuples for plotting.
#[derive(Default)]
struct Capture {
    markers: Vec<(f32, f32)>,
    curve: Vec<(f32, f32)>,
}

impl Renderer for Capture {
    fn draw(&mut self, control_points: &ControlPointSequence, curve: &SampleBuffer) {
        self.markers = control_points.points().map(|p| (p.x(), p.y())).collect();
        self.curve = curve.points().map(|p| (p.x(), p.y())).collect();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut editor = Editor::new(SketchConfig::default())?;

    // scripted clicks in window pixels; smooth joins add a mirrored handle after the 4th and 6th
    let clicks = [
        (64.0, 480.0),
        (128.0, 160.0),
        (256.0, 128.0),
        (320.0, 320.0),
        (480.0, 560.0),
        (576.0, 320.0),
    ];
    for &(px, py) in clicks.iter() {
        editor.click(px, py);
    }

    let mut cubic = Capture::default();
    editor.render_frame(&mut cubic);
    editor.set_curve_mode(CurveMode::Linear);
    let mut linear = Capture::default();
    editor.render_frame(&mut linear);

    let root = BitMapBackend::new("bezier_sketch.png", (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Piecewise Bezier Sketch", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-1f32..1f32, -1f32..1f32)?;

    chart.configure_mesh().draw()?;

    // control points as markers
    chart
        .draw_series(PointSeries::of_element(
            cubic.markers.clone(),
            4,
            &BLUE,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
        ))?
        .label("Control Points")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(linear.curve, &GREEN))?
        .label("Piecewise Linear")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .draw_series(LineSeries::new(cubic.curve, &RED))?
        .label("Piecewise Cubic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
