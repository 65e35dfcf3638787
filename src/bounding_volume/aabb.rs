//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};
use approx::{AbsDiffEq, RelativeEq};
use core::fmt;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always parallel
/// to the coordinate axes: it is never rotated, a rotated shape simply gets a larger AABB.
///
/// AABBs are the first, cheap, test of every overlap query of this crate: two shapes
/// with disjoint AABBs can't collide.
///
/// # Invariant
///
/// `mins.x ≤ maxs.x` and `mins.y ≤ maxs.y`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use satphys2d::bounding_volume::Aabb;
/// use nalgebra::{Point2, Vector2};
///
/// let aabb = Aabb::new(Point2::new(-2.0, -1.0), Point2::new(2.0, 1.0));
///
/// assert_eq!(aabb.center(), Point2::origin());
/// assert_eq!(aabb.width(), 4.0);
/// assert_eq!(aabb.extents(), Vector2::new(4.0, 2.0));
/// assert_eq!(aabb.half_extents(), Vector2::new(2.0, 1.0));
/// assert!(aabb.contains_local_point(&Point2::new(2.0, 0.5)));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates (bottom-left corner in a y-up frame).
    pub mins: Point<Real>,

    /// The point with maximum coordinates (top-right corner in a y-up frame).
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Used as the starting point of point-cloud bounding computations.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if the set is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.mins = result.mins.inf(pt);
            result.maxs = result.maxs.sup(pt);
        }

        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB, i.e., half its width and half its height.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents (size) of this AABB: its width and height.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The width of this AABB.
    #[inline]
    pub fn width(&self) -> Real {
        self.maxs.x - self.mins.x
    }

    /// The height of this AABB.
    #[inline]
    pub fn height(&self) -> Real {
        self.maxs.y - self.mins.y
    }

    /// Does this AABB contain the given point? Points on its boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        point.x >= self.mins.x
            && point.x <= self.maxs.x
            && point.y >= self.mins.y
            && point.y <= self.maxs.y
    }

    /// Does this AABB intersect the other one? Touching AABBs intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.maxs.x < other.mins.x
            || self.mins.x > other.maxs.x
            || self.maxs.y < other.mins.y
            || self.mins.y > other.maxs.y)
    }

    /// This AABB translated by `offset`.
    #[inline]
    pub fn translated(&self, offset: &Vector<Real>) -> Self {
        Self::new(self.mins + offset, self.maxs + offset)
    }

    /// The four corners of this AABB, in counter-clockwise order starting from `mins`.
    ///
    /// ```text
    ///    y             3 - 2
    ///    |             |   |
    ///    ___ x         0 - 1
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [
            Point::new(self.mins.x, self.mins.y),
            Point::new(self.maxs.x, self.mins.y),
            Point::new(self.maxs.x, self.maxs.y),
            Point::new(self.mins.x, self.maxs.y),
        ]
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.mins.x, self.mins.y, self.maxs.x, self.maxs.y
        )
    }
}

impl AbsDiffEq for Aabb {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Real {
        <Real as AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.mins.abs_diff_eq(&other.mins, epsilon) && self.maxs.abs_diff_eq(&other.maxs, epsilon)
    }
}

impl RelativeEq for Aabb {
    #[inline]
    fn default_max_relative() -> Real {
        <Real as RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.mins.relative_eq(&other.mins, epsilon, max_relative)
            && self.maxs.relative_eq(&other.maxs, epsilon, max_relative)
    }
}
