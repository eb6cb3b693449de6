use core::ops::{Add, Mul, Sub};

use num_traits::{Float, NumCast};

/// Trait defined over generic points P which themselves are generic over their Scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
    + IntoIterator<Item = <Self as Point>::Scalar>
{
    type Scalar: Float + NumCast + Default;
    const DIM: usize;

    // Returns the component of the Point on its axis corresponding to index e.g. [0, 1, 2] -> [x, y, z]
    fn axis(&self, index: usize) -> Self::Scalar;

    // Returns the squared L2 Norm of the Point interpreted as a Vector
    fn squared_length(&self) -> Self::Scalar;

    /// Linear interpolation `self + (other - self) * t`.
    /// This is the single step every evaluator in the crate is built from.
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self) * t
    }
}
