use super::*;

/// Straight segment between two control points, the building block of the linear path.
/// Evaluating it is a single `lerp`, so there is no separate type for it.
pub type LineSegment<P> = Bezier<P, 2>;

impl<P> Bezier<P, 2>
where
    P: Point,
{
    pub fn from_endpoints(start: P, end: P) -> Self {
        Bezier::new([start, end])
    }
}
