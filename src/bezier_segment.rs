//! Sum type for the segment kinds a sketch path is chained from.

use super::{CubicBezier, LineSegment, Point};

/// Sum type for line/cubic Bezier segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BezierSegment<P: Point> {
    Linear(LineSegment<P>),
    Cubic(CubicBezier<P>),
}

impl<P> BezierSegment<P>
where
    P: Point,
{
    /// Evaluate the segment at `t` in `[0, 1]`.
    pub fn eval(&self, t: P::Scalar) -> P {
        match self {
            BezierSegment::Linear(segment) => segment.eval(t),
            BezierSegment::Cubic(segment) => segment.eval_casteljau(t),
        }
    }

    #[inline]
    pub fn start(&self) -> P {
        match self {
            BezierSegment::Linear(segment) => segment.start(),
            BezierSegment::Cubic(segment) => segment.start(),
        }
    }

    #[inline]
    pub fn end(&self) -> P {
        match self {
            BezierSegment::Linear(segment) => segment.end(),
            BezierSegment::Cubic(segment) => segment.end(),
        }
    }

    /// Return the cubic segment, if this is one.
    pub fn as_cubic(&self) -> Option<&CubicBezier<P>> {
        match self {
            BezierSegment::Cubic(segment) => Some(segment),
            BezierSegment::Linear(..) => None,
        }
    }
}

impl<P> From<LineSegment<P>> for BezierSegment<P>
where
    P: Point,
{
    fn from(s: LineSegment<P>) -> Self {
        BezierSegment::Linear(s)
    }
}

impl<P> From<CubicBezier<P>> for BezierSegment<P>
where
    P: Point,
{
    fn from(s: CubicBezier<P>) -> Self {
        BezierSegment::Cubic(s)
    }
}
