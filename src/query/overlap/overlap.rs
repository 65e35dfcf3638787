use crate::query::details::{
    overlap_ball_ball, overlap_ball_polygon, overlap_polygon_ball, overlap_polygon_polygon,
};
use crate::query::Mtv;
use crate::shape::ColliderShape;

/// Computes the minimum translation vector between two shapes.
///
/// This never fails: shapes that don't overlap yield [`Mtv::zero`]. Use
/// [`Mtv::is_collision`] to tell both cases apart.
///
/// # Behavior
///
/// Shapes with disjoint AABBs are rejected first. Then:
/// - **Ball-Ball**: closed-form test, see [`overlap_ball_ball`]. The axis points toward `shape1`.
/// - **Ball-Polygon**: SAT on the polygon normals, see [`overlap_ball_polygon`]. The axis
///   points toward the ball whichever argument it is.
/// - **Polygon-Polygon**: SAT on the normals of both polygons, see
///   [`overlap_polygon_polygon`]. The sign of the axis is the one of the normal it came from.
///
/// Cuboids and segments are handled as the polygons backing them. Because the sign of
/// the axis depends on the shapes, callers that push shapes apart should orient it
/// themselves with [`Mtv::oriented_towards`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use satphys2d::math::Point;
/// use satphys2d::query;
/// use satphys2d::shape::{Ball, ColliderShape, Cuboid};
///
/// let floor = ColliderShape::from(Cuboid::from_center(Point::origin(), [500.0, 10.0].into()));
/// let ball = ColliderShape::from(Ball::new(Point::new(0.0, 12.0), 10.0));
/// let far = ColliderShape::from(Ball::new(Point::new(0.0, 100.0), 10.0));
///
/// assert!(query::overlap(&ball, &floor).is_collision());
/// assert_eq!(query::overlap(&far, &floor), query::Mtv::zero());
/// # }
/// ```
pub fn overlap(shape1: &ColliderShape, shape2: &ColliderShape) -> Mtv {
    if !shape1.aabb().intersects(&shape2.aabb()) {
        return Mtv::zero();
    }

    match (shape1, shape2) {
        (ColliderShape::Ball(b1), ColliderShape::Ball(b2)) => overlap_ball_ball(b1, b2),
        (ColliderShape::Ball(b1), _) => shape2
            .as_polygon()
            .map(|p2| overlap_ball_polygon(b1, p2))
            .unwrap_or_default(),
        (_, ColliderShape::Ball(b2)) => shape1
            .as_polygon()
            .map(|p1| overlap_polygon_ball(p1, b2))
            .unwrap_or_default(),
        _ => match (shape1.as_polygon(), shape2.as_polygon()) {
            (Some(p1), Some(p2)) => overlap_polygon_polygon(p1, p2),
            _ => Mtv::zero(),
        },
    }
}
