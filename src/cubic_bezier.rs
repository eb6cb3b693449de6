use num_traits::One;

use super::point::Point;

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Evaluate a CubicBezier curve at t by direct evaluation of the polynomial (not numerically stable)
    pub fn eval(&self, t: P::Scalar) -> P {
        let one = P::Scalar::one();
        let three = one + one + one;
        let one_t = one - t;

        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (three * t * one_t * one_t)
            + self.ctrl2 * (three * t * t * one_t)
            + self.end * (t * t * t)
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // _1ab is the first level from the first (a) to the second (b) control point and so on
        let ctrl_1ab = self.start.lerp(self.ctrl1, t);
        let ctrl_1bc = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl_1cd = self.ctrl2.lerp(self.end, t);
        let ctrl_2ab = ctrl_1ab.lerp(ctrl_1bc, t);
        let ctrl_2bc = ctrl_1bc.lerp(ctrl_1cd, t);
        ctrl_2ab.lerp(ctrl_2bc, t)
    }
}
