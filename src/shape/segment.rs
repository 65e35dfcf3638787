//! Definition of the segment shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{AxisProjection, ConvexPolygon};

/// A segment shape: a degenerate polygon with two vertices.
///
/// It takes part in overlap tests like any polygon, and additionally answers
/// point-distance queries.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct Segment {
    polygon: ConvexPolygon,
}

impl Segment {
    /// Points closer than this distance are considered to lie on the segment.
    pub const CONTAINS_TOLERANCE: Real = 0.001;

    /// Creates a new segment from two points.
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment {
            polygon: ConvexPolygon::new_unchecked(vec![a, b]),
        }
    }

    /// The segment first point.
    #[inline]
    pub fn a(&self) -> Point<Real> {
        self.polygon.points()[0]
    }

    /// The segment second point.
    #[inline]
    pub fn b(&self) -> Point<Real> {
        self.polygon.points()[1]
    }

    /// The polygon describing this segment.
    #[inline]
    pub fn as_polygon(&self) -> &ConvexPolygon {
        &self.polygon
    }

    #[inline]
    pub(crate) fn as_polygon_mut(&mut self) -> &mut ConvexPolygon {
        &mut self.polygon
    }

    /// The AABB of this segment.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.polygon.aabb()
    }

    /// The point of this segment closest to `pt`.
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        let a = self.a();
        let ab = self.b() - a;
        let sq_len = ab.norm_squared();

        if sq_len == 0.0 {
            return a;
        }

        let t = ((pt - a).dot(&ab) / sq_len).clamp(0.0, 1.0);
        a + ab * t
    }

    /// The squared distance between `pt` and this segment.
    #[inline]
    pub fn distance_squared(&self, pt: &Point<Real>) -> Real {
        (pt - self.project_point(pt)).norm_squared()
    }

    /// The distance between `pt` and this segment.
    #[inline]
    pub fn distance(&self, pt: &Point<Real>) -> Real {
        self.distance_squared(pt).sqrt()
    }

    /// Tests if `pt` lies on this segment, up to [`Self::CONTAINS_TOLERANCE`].
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.distance(pt) < Self::CONTAINS_TOLERANCE
    }
}

impl AxisProjection for Segment {
    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        self.polygon.project_on_axis(axis)
    }
}
