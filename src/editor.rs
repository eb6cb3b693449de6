//! The editing side of the sketch: click handling, the dirty flag and the per-frame rebuild.

use crate::config::{CurveMode, SketchConfig};
use crate::control_points::ControlPointSequence;
use crate::error::SketchError;
use crate::sample_buffer::SampleBuffer;
use crate::sampler::{CubicSampler, LinearSampler, PathSampler};
use crate::viewport::Viewport;
use crate::Vertex;

/// Consumer of a finished frame. Implemented by whatever owns the GPU buffers or canvas.
pub trait Renderer {
    /// Draw `control_points` as markers and `curve` as a connected line strip.
    fn draw(&mut self, control_points: &ControlPointSequence, curve: &SampleBuffer);
}

/// What a click did to the sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new control point was appended at this index.
    Added(usize),
    /// The point at this index is now held; the next click moves it.
    Picked(usize),
    /// The held point at this index was moved to the click position.
    Moved(usize),
}

/// Both evaluated curves of the current control points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveBuffers {
    pub linear: SampleBuffer,
    pub cubic: SampleBuffer,
}

impl CurveBuffers {
    pub fn get(&self, mode: CurveMode) -> &SampleBuffer {
        match mode {
            CurveMode::Linear => &self.linear,
            CurveMode::Cubic => &self.cubic,
        }
    }
}

pub struct Editor {
    config: SketchConfig,
    viewport: Viewport,
    linear: LinearSampler,
    cubic: CubicSampler,
    points: ControlPointSequence,
    buffers: CurveBuffers,
    dirty: bool,
    picked: Option<usize>,
    // points placed in the current cubic group, counting the shared anchor
    group_len: usize,
    prev_click: Option<(f32, f32)>,
}

impl Editor {
    pub fn new(config: SketchConfig) -> Result<Self, SketchError> {
        config.validate()?;
        let viewport = Viewport::new(config.window_width, config.window_height)?;
        let linear = LinearSampler::new(config.samples_per_segment)?;
        let cubic = CubicSampler::new(config.samples_per_segment, config.cubic_scheme)?;
        Ok(Editor {
            config,
            viewport,
            linear,
            cubic,
            points: ControlPointSequence::new(),
            buffers: CurveBuffers::default(),
            dirty: false,
            picked: None,
            group_len: 0,
            prev_click: None,
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn control_points(&self) -> &ControlPointSequence {
        &self.points
    }

    pub fn buffers(&self) -> &CurveBuffers {
        &self.buffers
    }

    /// The curve buffer selected by the current curve mode.
    pub fn active_curve(&self) -> &SampleBuffer {
        self.buffers.get(self.config.curve_mode)
    }

    pub fn picked(&self) -> Option<usize> {
        self.picked
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Switch the drawn curve. No rebuild is needed since both curves are always current.
    pub fn set_curve_mode(&mut self, mode: CurveMode) {
        self.config.curve_mode = mode;
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SketchError> {
        self.viewport.resize(width, height)?;
        self.config.window_width = width;
        self.config.window_height = height;
        Ok(())
    }

    /// Handle a primary click at pixel `(px, py)`.
    ///
    /// A held point is moved to the click. Otherwise a click on an existing point
    /// picks it up, and a click on empty canvas appends a new point.
    pub fn click(&mut self, px: f32, py: f32) -> ClickOutcome {
        let (x, y) = self.viewport.to_curve_space(px, py);

        // the store never shrinks, so a held index stays valid
        if let Some(index) = self.picked.take() {
            match self.points.set(index, x, y) {
                Ok(()) => {
                    self.dirty = true;
                    log::debug!("moved control point {} to ({:.3}, {:.3})", index, x, y);
                    return ClickOutcome::Moved(index);
                }
                Err(e) => log::warn!("dropping held control point: {}", e),
            }
        }

        if let Some(index) = self.points.pick(x, y, self.config.pick_tolerance) {
            self.picked = Some(index);
            log::debug!("picked control point {}", index);
            return ClickOutcome::Picked(index);
        }

        let index = self.points.push(x, y);
        log::debug!("added control point {} at ({:.3}, {:.3})", index, x, y);
        self.group_len += 1;
        if self.config.smooth_joins && self.group_len == 4 {
            if let Some((prev_x, prev_y)) = self.prev_click {
                // mirror the previous handle through the anchor just placed
                let (hx, hy) = (2.0 * x - prev_x, 2.0 * y - prev_y);
                let handle = self.points.push(hx, hy);
                log::debug!("added mirrored handle {} at ({:.3}, {:.3})", handle, hx, hy);
            }
            self.group_len = 2;
        }
        self.prev_click = Some((x, y));
        self.dirty = true;
        ClickOutcome::Added(index)
    }

    /// Recompute both curves from the current control points and clear the dirty flag.
    pub fn rebuild(&mut self) {
        self.buffers = CurveBuffers {
            linear: self.linear.sample(&self.points),
            cubic: self.cubic.sample(&self.points),
        };
        self.dirty = false;
        log::trace!(
            "rebuilt curves for {} control points: {} linear, {} cubic samples",
            self.points.len(),
            self.buffers.linear.len(),
            self.buffers.cubic.len()
        );
    }

    /// Run one frame: rebuild if anything changed, then hand the markers and the
    /// active curve to `renderer`.
    pub fn render_frame<R: Renderer>(&mut self, renderer: &mut R) {
        if self.dirty {
            self.rebuild();
        }
        renderer.draw(&self.points, self.buffers.get(self.config.curve_mode));
    }

    /// Control point under pixel `(px, py)`, if any, without changing the editor state.
    pub fn hover(&self, px: f32, py: f32) -> Option<(usize, Vertex)> {
        let (x, y) = self.viewport.to_curve_space(px, py);
        let index = self.points.pick(x, y, self.config.pick_tolerance)?;
        self.points.point(index).map(|p| (index, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, EPSILON};

    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<(usize, Vec<f32>)>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, control_points: &ControlPointSequence, curve: &SampleBuffer) {
            self.frames.push((control_points.len(), curve.as_slice().to_vec()));
        }
    }

    fn editor(smooth_joins: bool) -> Editor {
        Editor::new(SketchConfig {
            samples_per_segment: 10,
            smooth_joins,
            ..SketchConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SketchConfig {
            samples_per_segment: 1,
            ..SketchConfig::default()
        };
        assert!(matches!(Editor::new(config), Err(SketchError::TooFewSamples(1))));
    }

    #[test]
    fn click_adds_normalized_point() {
        let mut editor = editor(false);
        assert!(!editor.is_dirty());
        assert_eq!(editor.click(320.0, 160.0), ClickOutcome::Added(0));
        assert!(editor.is_dirty());

        let p = editor.control_points().point(0).unwrap();
        assert_eq!((p.x(), p.y()), (0.0, 0.5));
        assert_eq!(p.axis(2), 0.0);
    }

    #[test]
    fn click_on_point_picks_then_moves_it() {
        let mut editor = editor(false);
        editor.click(100.0, 100.0);
        editor.click(300.0, 300.0);
        editor.rebuild();

        // within the pick square of the first point
        assert_eq!(editor.click(101.0, 99.0), ClickOutcome::Picked(0));
        assert_eq!(editor.picked(), Some(0));
        assert!(!editor.is_dirty());

        assert_eq!(editor.click(500.0, 500.0), ClickOutcome::Moved(0));
        assert_eq!(editor.picked(), None);
        assert!(editor.is_dirty());
        assert_eq!(editor.control_points().len(), 2);

        let moved = editor.control_points().point(0).unwrap();
        let (x, y) = editor.viewport().to_curve_space(500.0, 500.0);
        assert_eq!((moved.x(), moved.y()), (x, y));
    }

    #[test]
    fn smooth_joins_mirror_the_previous_handle() {
        let mut editor = editor(true);
        for &(px, py) in &[(64.0, 320.0), (160.0, 128.0), (288.0, 128.0), (384.0, 320.0)] {
            editor.click(px, py);
        }
        let points = editor.control_points().to_vec();
        assert_eq!(points.len(), 5);

        // handle = 2 * anchor - previous click
        let mirrored = points[3] * 2.0f32 - points[2];
        assert!(((points[4] - mirrored).squared_length() as f64) < EPSILON);

        // two more clicks close the second segment and mirror again
        editor.click(480.0, 480.0);
        editor.click(576.0, 320.0);
        assert_eq!(editor.control_points().len(), 8);

        editor.rebuild();
        assert_eq!(editor.buffers().cubic.len(), 2 * 9 + 1);
        assert_eq!(editor.buffers().linear.len(), 7 * 9 + 1);
    }

    #[test]
    fn mirrored_handle_can_be_picked_and_moved() {
        let mut editor = editor(true);
        for &(px, py) in &[(64.0, 320.0), (160.0, 128.0), (288.0, 128.0), (384.0, 320.0)] {
            editor.click(px, py);
        }
        // 2 * (384, 320) - (288, 128) in pixels
        assert_eq!(editor.click(480.0, 512.0), ClickOutcome::Picked(4));
        assert_eq!(editor.click(448.0, 480.0), ClickOutcome::Moved(4));
        assert_eq!(editor.control_points().len(), 5);

        let moved = editor.control_points().point(4).unwrap();
        let (x, y) = editor.viewport().to_curve_space(448.0, 480.0);
        assert_eq!((moved.x(), moved.y()), (x, y));

        // the move does not count towards the next cubic group
        assert_eq!(editor.click(600.0, 100.0), ClickOutcome::Added(5));
        assert_eq!(editor.control_points().len(), 6);
    }

    #[test]
    fn plain_clicks_only_append() {
        let mut editor = editor(false);
        for i in 0..6 {
            editor.click(50.0 + 90.0 * i as f32, 320.0);
        }
        assert_eq!(editor.control_points().len(), 6);
    }

    #[test]
    fn frames_rebuild_only_when_dirty() {
        let mut editor = editor(false);
        let mut renderer = RecordingRenderer::default();

        editor.render_frame(&mut renderer);
        assert_eq!(renderer.frames[0], (0, vec![]));

        editor.click(64.0, 64.0);
        editor.click(128.0, 64.0);
        editor.click(192.0, 128.0);
        editor.click(256.0, 64.0);
        editor.render_frame(&mut renderer);
        assert!(!editor.is_dirty());
        assert_eq!(renderer.frames[1].0, 4);
        assert_eq!(renderer.frames[1].1.len(), 3 * 10);

        // unchanged points: same buffer handed out again
        editor.render_frame(&mut renderer);
        assert_eq!(renderer.frames[2], renderer.frames[1]);

        // switching the mode draws the other curve without touching the points
        editor.set_curve_mode(CurveMode::Linear);
        editor.render_frame(&mut renderer);
        assert_eq!(renderer.frames[3].1.len(), 3 * (3 * 9 + 1));
        assert_eq!(editor.active_curve(), &editor.buffers().linear);
    }

    #[test]
    fn hover_reports_point_under_cursor() {
        let mut editor = editor(false);
        editor.click(200.0, 200.0);
        let (index, p) = editor.hover(201.0, 201.0).unwrap();
        assert_eq!(index, 0);
        assert_eq!(Some(p), editor.control_points().point(0));
        assert!(editor.hover(400.0, 400.0).is_none());
        assert_eq!(editor.picked(), None);
    }

    #[test]
    fn resize_changes_mapping() {
        let mut editor = editor(false);
        editor.resize(1280, 640).unwrap();
        editor.click(640.0, 320.0);
        let p = editor.control_points().point(0).unwrap();
        assert_eq!((p.x(), p.y()), (0.0, 0.0));
        assert!(editor.resize(0, 10).is_err());
    }
}
