//! Fixed-resolution evaluators that turn a control point sequence into a dense polyline.
//!
//! Both samplers emit `S - 1` samples per segment: the segment start followed by
//! `S - 2` interior samples. The segment end is left out because it is the start of
//! the next segment, and the end of the whole path is appended once after the loop.
//! A buffer built from `k` segments therefore holds `k * (S - 1) + 1` samples.

use serde::{Deserialize, Serialize};
use tinyvec::TinyVec;

use crate::bezier_segment::BezierSegment;
use crate::control_points::ControlPointSequence;
use crate::error::SketchError;
use crate::path::{cubic_segment_count, linear_segment_count, BezierPath};
use crate::sample_buffer::SampleBuffer;
use crate::{CubicBezier, Point, Vertex};

/// Default sampling resolution.
pub const SAMPLES_PER_SEGMENT: usize = 100;

// Interpolation tables up to this resolution stay on the stack.
const TABLE_INLINE: usize = 128;

type LerpTable = TinyVec<[Vertex; TABLE_INLINE]>;

/// Shared seam of the linear and cubic evaluators.
pub trait PathSampler {
    /// Rebuild the full sample buffer for `points`.
    fn sample(&self, points: &ControlPointSequence) -> SampleBuffer;

    /// Number of curve segments `points` control points are split into.
    fn segment_count(&self, points: usize) -> usize;
}

/// How interior samples of a cubic segment are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubicScheme {
    /// Three tables of first-level lerps over the control polygon, blended twice with
    /// the sample position `j * delta_t` as factor. Not the textbook cubic: the first
    /// level runs one step ahead of the two blends.
    #[default]
    Reference,
    /// Sample `j` is the cubic Bezier at `t = j * delta_t`, evaluated by de Casteljau.
    DeCasteljau,
}

/// Step between consecutive samples, `1 / (S - 1)`.
/// Computed in double precision and rounded once.
fn delta_t(samples: usize) -> f32 {
    (1.0 / (samples as f64 - 1.0)) as f32
}

fn checked_samples(samples: usize) -> Result<usize, SketchError> {
    if samples < 2 {
        return Err(SketchError::TooFewSamples(samples));
    }
    Ok(samples)
}

/// Piecewise linear evaluator: every consecutive pair of control points is a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearSampler {
    samples_per_segment: usize,
}

impl LinearSampler {
    pub fn new(samples_per_segment: usize) -> Result<Self, SketchError> {
        Ok(LinearSampler {
            samples_per_segment: checked_samples(samples_per_segment)?,
        })
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }
}

impl Default for LinearSampler {
    fn default() -> Self {
        LinearSampler {
            samples_per_segment: SAMPLES_PER_SEGMENT,
        }
    }
}

impl PathSampler for LinearSampler {
    fn sample(&self, points: &ControlPointSequence) -> SampleBuffer {
        let vertices = points.to_vec();
        let path = BezierPath::piecewise_linear(&vertices);
        let samples = self.samples_per_segment;
        let dt = delta_t(samples);

        let mut out = SampleBuffer::with_capacity(path.len() * (samples - 1) + 1);
        for segment in path.segments() {
            out.push(segment.start());
            let mut t = 0.0f32;
            for _ in 1..samples - 1 {
                t += dt;
                out.push(segment.eval(t));
            }
        }
        // a single point has no segment but is still the whole path
        if let Some(last) = vertices.last() {
            out.push(*last);
        }

        log::trace!(
            "linear rebuild: {} points, {} segments, {} samples",
            vertices.len(),
            path.len(),
            out.len()
        );
        out
    }

    fn segment_count(&self, points: usize) -> usize {
        linear_segment_count(points)
    }
}

/// Piecewise cubic evaluator: groups of four control points with a stride of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubicSampler {
    samples_per_segment: usize,
    scheme: CubicScheme,
}

impl CubicSampler {
    pub fn new(samples_per_segment: usize, scheme: CubicScheme) -> Result<Self, SketchError> {
        Ok(CubicSampler {
            samples_per_segment: checked_samples(samples_per_segment)?,
            scheme,
        })
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    pub fn scheme(&self) -> CubicScheme {
        self.scheme
    }

    fn sample_segment(&self, cubic: &CubicBezier<Vertex>, out: &mut SampleBuffer) {
        out.push(cubic.start);
        match self.scheme {
            CubicScheme::Reference => nested_lerp_samples(cubic, self.samples_per_segment, out),
            CubicScheme::DeCasteljau => {
                let dt = delta_t(self.samples_per_segment);
                for j in 1..self.samples_per_segment - 1 {
                    out.push(cubic.eval_casteljau(dt * j as f32));
                }
            }
        }
    }
}

impl Default for CubicSampler {
    fn default() -> Self {
        CubicSampler {
            samples_per_segment: SAMPLES_PER_SEGMENT,
            scheme: CubicScheme::default(),
        }
    }
}

impl PathSampler for CubicSampler {
    fn sample(&self, points: &ControlPointSequence) -> SampleBuffer {
        let vertices = points.to_vec();
        let path = BezierPath::piecewise_cubic(&vertices);

        // fewer than four points: the path degenerates to the polyline through them
        if path.is_empty() {
            let mut out = SampleBuffer::with_capacity(vertices.len());
            for v in vertices.iter() {
                out.push(*v);
            }
            log::trace!("cubic rebuild: {} points, no full segment", vertices.len());
            return out;
        }

        let mut out = SampleBuffer::with_capacity(path.len() * (self.samples_per_segment - 1) + 1);
        for cubic in path.segments().filter_map(BezierSegment::as_cubic) {
            self.sample_segment(cubic, &mut out);
        }
        if let Some(end) = path.end() {
            out.push(end);
        }

        log::trace!(
            "cubic rebuild ({:?}): {} points, {} segments, {} samples",
            self.scheme,
            vertices.len(),
            path.len(),
            out.len()
        );
        out
    }

    fn segment_count(&self, points: usize) -> usize {
        cubic_segment_count(points)
    }
}

/// `samples` lerps from `a` towards `b` with `t` accumulated from `delta_t` up to `samples * delta_t`.
fn lerp_table(a: Vertex, b: Vertex, dt: f32, samples: usize) -> LerpTable {
    let mut t = 0.0f32;
    (0..samples)
        .map(|_| {
            t += dt;
            a.lerp(b, t)
        })
        .collect()
}

/// Interior samples of `cubic` by three levels of linear interpolation:
/// edge tables of the control polygon, then two quadratic blends, then the cubic blend.
fn nested_lerp_samples(cubic: &CubicBezier<Vertex>, samples: usize, out: &mut SampleBuffer) {
    let dt = delta_t(samples);
    let [first, second, third] = [
        (cubic.start, cubic.ctrl1),
        (cubic.ctrl1, cubic.ctrl2),
        (cubic.ctrl2, cubic.end),
    ]
    .map(|(a, b)| lerp_table(a, b, dt, samples));

    for j in 1..samples - 1 {
        let blend = dt * j as f32;
        let quad_a = first[j].lerp(second[j], blend);
        let quad_b = second[j].lerp(third[j], blend);
        out.push(quad_a.lerp(quad_b, blend));
    }
}
