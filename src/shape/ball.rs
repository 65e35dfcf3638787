use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::AxisProjection;
use crate::utils;

/// A circle, positioned in world-space.
///
/// Its AABB is the square of side `2 * radius` centered on the circle. Against polygons,
/// the separating-axis test projects that square rather than the circle itself, so a
/// ball behaves like its bounding square along slanted polygon normals.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The center of the ball.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Ball {
        Ball { center, radius }
    }

    /// The AABB of this ball.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }

    /// Tests if `pt` is inside this ball (boundary included).
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        (pt - self.center).norm_squared() <= self.radius * self.radius
    }
}

impl AxisProjection for Ball {
    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        utils::point_cloud_projection(axis, &self.aabb().vertices())
    }
}
