use crate::math::{Real, Vector};
use approx::{AbsDiffEq, RelativeEq};
use num::Zero;

/// A minimum translation vector: the smallest displacement separating two overlapping shapes.
///
/// Overlap queries never fail. Shapes that don't overlap yield [`Mtv::zero`], so callers
/// should check [`Mtv::is_collision`] rather than compare with a sentinel.
///
/// The `axis` is unit-length for every colliding result, and `value` is the penetration
/// depth along it. The sign of the axis depends on the query, see [`crate::query::overlap`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use satphys2d::math::Vector;
/// use satphys2d::query::Mtv;
///
/// let mtv = Mtv::new(Vector::x(), 2.0);
/// assert!(mtv.is_collision());
/// assert_eq!(mtv.translation(), Vector::new(2.0, 0.0));
/// assert!(!Mtv::zero().is_collision());
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mtv {
    /// The direction along which the shapes must be moved apart.
    pub axis: Vector<Real>,
    /// The penetration depth along `axis`.
    pub value: Real,
}

impl Mtv {
    /// Creates a new minimum translation vector.
    #[inline]
    pub fn new(axis: Vector<Real>, value: Real) -> Self {
        Self { axis, value }
    }

    /// The result of an overlap query between two shapes that don't overlap.
    #[inline]
    pub fn zero() -> Self {
        Self::new(Vector::zero(), 0.0)
    }

    /// Does this describe an actual overlap?
    ///
    /// This is `false` if the value isn't positive or if the axis is zero.
    #[inline]
    pub fn is_collision(&self) -> bool {
        self.value > 0.0 && !self.axis.is_zero()
    }

    /// The displacement `axis * value`.
    #[inline]
    pub fn translation(&self) -> Vector<Real> {
        self.axis * self.value
    }

    /// Reverses the direction of the axis.
    #[inline]
    pub fn flip(&mut self) {
        self.axis = -self.axis;
    }

    /// A copy of `self` with its axis reversed.
    #[inline]
    #[must_use]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// A copy of `self` with its axis pointing along `dir`.
    ///
    /// The axis is reversed if it makes an obtuse angle with `dir`. It is left
    /// untouched if it is orthogonal to `dir`.
    #[must_use]
    pub fn oriented_towards(self, dir: &Vector<Real>) -> Self {
        if self.axis.dot(dir) < 0.0 {
            self.flipped()
        } else {
            self
        }
    }
}

impl Default for Mtv {
    fn default() -> Self {
        Self::zero()
    }
}

impl AbsDiffEq for Mtv {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <Real as AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.axis.abs_diff_eq(&other.axis, epsilon) && self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl RelativeEq for Mtv {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <Real as RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.axis.relative_eq(&other.axis, epsilon, max_relative)
            && self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}
