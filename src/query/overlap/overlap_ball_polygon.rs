use crate::query::sat;
use crate::query::Mtv;
use crate::shape::{Ball, ConvexPolygon};

/// Overlap between a ball and a polygon.
///
/// Only the edge normals of the polygon are tested, and the ball is projected as its
/// bounding square. The axis of the result is the reverse of the polygon normal along
/// which the shapes overlap the least.
pub fn overlap_ball_polygon(ball: &Ball, polygon: &ConvexPolygon) -> Mtv {
    sat::find_min_overlap(ball, polygon, polygon.normals()).flipped()
}

/// Overlap between a polygon and a ball.
///
/// This is the same as [`overlap_ball_polygon`] with the arguments swapped. In
/// particular the axis is *not* flipped again: it is still expressed relative to the ball.
#[inline]
pub fn overlap_polygon_ball(polygon: &ConvexPolygon, ball: &Ball) -> Mtv {
    overlap_ball_polygon(ball, polygon)
}
