use core::slice;

use super::*;
use crate::bezier_segment::BezierSegment;

/// A path composed of Bezier segments chained end to end.
///
/// Consecutive segments share their boundary point: the end of segment k
/// is the start of segment k+1.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BezierPath<P>
where
    P: Point,
{
    segments: Vec<BezierSegment<P>>,
}

impl<P> BezierPath<P>
where
    P: Point,
{
    /// Chain every consecutive pair of `points` into a line segment (stride 1).
    pub fn piecewise_linear(points: &[P]) -> Self {
        let segments = points
            .windows(2)
            .map(|pair| BezierSegment::from(LineSegment::from_endpoints(pair[0], pair[1])))
            .collect();
        BezierPath { segments }
    }

    /// Chain groups of four `points` into cubic segments with a stride of three,
    /// so point 3k is shared by segment k-1 and k. Trailing points that do not
    /// complete a group are not part of the path.
    pub fn piecewise_cubic(points: &[P]) -> Self {
        let count = cubic_segment_count(points.len());
        let segments = (0..count)
            .map(|k| {
                let i = 3 * k;
                BezierSegment::from(CubicBezier::new(points[i], points[i + 1], points[i + 2], points[i + 3]))
            })
            .collect();
        BezierPath { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> slice::Iter<'_, BezierSegment<P>> {
        self.segments.iter()
    }

    /// Start point of the first segment.
    pub fn start(&self) -> Option<P> {
        self.segments.first().map(BezierSegment::start)
    }

    /// End point of the last segment.
    pub fn end(&self) -> Option<P> {
        self.segments.last().map(BezierSegment::end)
    }
}

/// Number of line segments a sequence of `points` control points produces.
pub fn linear_segment_count(points: usize) -> usize {
    points.saturating_sub(1)
}

/// Number of full cubic segments (groups of four with a shared anchor) in `points` control points.
pub fn cubic_segment_count(points: usize) -> usize {
    points.saturating_sub(1) / 3
}
