//! Rotated box shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{AxisProjection, ConvexPolygon};

/// Shape of a box that can be rotated around its center.
///
/// The box is a [`ConvexPolygon`] with four vertices. Setting its rotation rotates the
/// current vertices by the difference between the old and the new angle, so the rotation
/// setters always take the absolute target angle.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct Cuboid {
    polygon: ConvexPolygon,
    /// Rotation in degrees.
    rotation: Real,
}

impl Cuboid {
    /// Creates the box covering `aabb`, rotated by `rotation` degrees around its center.
    pub fn new(aabb: &Aabb, rotation: Real) -> Self {
        let mut result = Cuboid {
            polygon: ConvexPolygon::from_aabb(aabb),
            rotation: 0.0,
        };
        result.set_rotation(rotation);
        result
    }

    /// Creates the box with the given unrotated corners.
    pub fn from_corners(mins: Point<Real>, maxs: Point<Real>, rotation: Real) -> Self {
        Self::new(&Aabb::new(mins, maxs), rotation)
    }

    /// Creates an unrotated box centered at `center`, with the given width and height.
    pub fn from_center(center: Point<Real>, size: Vector<Real>) -> Self {
        Self::new(&Aabb::from_half_extents(center, size / 2.0), 0.0)
    }

    /// The rotation of this box, in degrees.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// Sets the absolute rotation of this box, in degrees.
    ///
    /// The vertices are rotated around the current center by the difference with the
    /// previous rotation.
    pub fn set_rotation(&mut self, rotation: Real) {
        let delta = self.rotation - rotation;
        self.rotation = rotation;

        let center = self.polygon.center();
        self.polygon.rotate_around(&center, -delta.to_radians());
    }

    /// The polygon describing this box.
    #[inline]
    pub fn as_polygon(&self) -> &ConvexPolygon {
        &self.polygon
    }

    /// The polygon describing this box.
    #[inline]
    pub(crate) fn as_polygon_mut(&mut self) -> &mut ConvexPolygon {
        &mut self.polygon
    }

    /// The four vertices of this box.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        self.polygon.points()
    }

    /// The AABB of this box.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.polygon.aabb()
    }

    /// Tests if `pt` is inside the AABB of this box.
    ///
    /// This is exact for unrotated boxes only: a rotated box is approximated by its AABB.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.polygon.aabb().contains_local_point(pt)
    }
}

impl AxisProjection for Cuboid {
    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        self.polygon.project_on_axis(axis)
    }
}
