use super::point::Point;

/// Bezier curve of degree `N - 1`, stored as its `N` control points.
///
/// The sketch only chains two-point curves through this type (see [`crate::LineSegment`]);
/// cubic segments use the unrolled [`crate::CubicBezier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bezier<P, const N: usize>
where
    P: Point,
{
    pub(crate) control_points: [P; N],
}

impl<P, const N: usize> Bezier<P, N>
where
    P: Point,
{
    pub fn new(control_points: [P; N]) -> Self {
        Bezier { control_points }
    }

    /// Curve value at t = 0.
    pub fn start(&self) -> P {
        self.control_points[0]
    }

    /// Curve value at t = 1.
    pub fn end(&self) -> P {
        self.control_points[N - 1]
    }

    /// Evaluate at `t` in [0, 1] by de Casteljau: each level replaces point `j` with
    /// the lerp towards point `j + 1` until one point is left.
    pub fn eval(&self, t: P::Scalar) -> P {
        let mut level = self.control_points;
        for len in (1..N).rev() {
            for j in 0..len {
                level[j] = level[j].lerp(level[j + 1], t);
            }
        }
        level[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubicBezier, PointN, Vertex, EPSILON};

    #[test]
    fn eval_hits_first_and_last_control_point() {
        let curve = Bezier::new([
            Vertex::planar(-0.9, -0.3),
            Vertex::planar(-0.75, 0.4),
            Vertex::planar(-0.6, -0.3),
            Vertex::planar(-0.45, 0.4),
            Vertex::planar(-0.3, -0.3),
        ]);
        assert_eq!(curve.eval(0.0), curve.start());
        assert!(((curve.eval(1.0) - curve.end()).squared_length() as f64) < EPSILON);
    }

    #[test]
    fn two_points_reduce_to_a_single_lerp() {
        let a = Vertex::planar(0.1, -0.2);
        let b = Vertex::planar(0.7, 0.5);
        let line = Bezier::new([a, b]);
        for i in 0..=16 {
            let t = i as f32 / 16.0;
            assert_eq!(line.eval(t), a.lerp(b, t));
        }
    }

    #[test]
    fn four_points_match_the_unrolled_cubic() {
        let points = [
            PointN::new([0f64, 1.77f64]),
            PointN::new([1.1f64, -1f64]),
            PointN::new([4.3f64, 3f64]),
            PointN::new([3.2f64, -4f64]),
        ];
        let generic = Bezier::new(points);
        let cubic = CubicBezier::new(points[0], points[1], points[2], points[3]);

        let nsteps: usize = 200;
        for i in 0..=nsteps {
            let t = i as f64 / nsteps as f64;
            let err = generic.eval(t) - cubic.eval_casteljau(t);
            assert!(err.squared_length() < EPSILON);
        }
    }
}
