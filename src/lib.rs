//! Curve evaluation for an interactive piecewise Bézier sketch.
//!
//! Control points are placed by clicking; after every edit both a piecewise linear and
//! a piecewise cubic Bézier path are re-sampled at a fixed resolution into flat xyz
//! buffers that can be drawn as line strips. All curve evaluation is built from
//! repeated linear interpolation (the de Casteljau construction).
//!
//! ```rust
//! use bezier_sketch::{ControlPointSequence, CubicSampler, LinearSampler, PathSampler};
//!
//! let mut points = ControlPointSequence::new();
//! for (x, y) in [(-0.8, -0.5), (-0.4, 0.6), (0.3, 0.6), (0.8, -0.5)] {
//!     points.push(x, y);
//! }
//!
//! let linear = LinearSampler::default().sample(&points);
//! let cubic = CubicSampler::default().sample(&points);
//! assert_eq!(linear.len(), 3 * 99 + 1);
//! assert_eq!(cubic.len(), 99 + 1);
//! ```

pub mod bezier;
pub mod bezier_segment;
pub mod config;
pub mod control_points;
pub mod cubic_bezier;
pub mod editor;
pub mod error;
pub mod line;
pub mod path;
pub mod point;
pub mod point_generic;
pub mod sample_buffer;
pub mod sampler;
pub mod viewport;

// Traits
pub use point::Point;
pub use sampler::PathSampler;

// Curve types
pub use bezier::Bezier;
pub use bezier_segment::BezierSegment;
pub use cubic_bezier::CubicBezier;
pub use line::LineSegment;
pub use path::BezierPath;
pub use point_generic::{PointN, Vertex};

// Sketch engine
pub use config::{CurveMode, SketchConfig};
pub use control_points::ControlPointSequence;
pub use editor::{ClickOutcome, CurveBuffers, Editor, Renderer};
pub use error::SketchError;
pub use sample_buffer::SampleBuffer;
pub use sampler::{CubicSampler, CubicScheme, LinearSampler, SAMPLES_PER_SEGMENT};
pub use viewport::Viewport;

/// Absolute tolerance used when comparing (squared) distances between points.
pub const EPSILON: f64 = 1e-6;
