use crate::math::Vector;
use crate::query::Mtv;
use crate::shape::Ball;
use num::Zero;

/// Overlap between two balls.
///
/// The axis of the result points from `b2` toward `b1`. Balls with the same center
/// yield the "up" axis and the smallest of the two radii.
#[inline]
pub fn overlap_ball_ball(b1: &Ball, b2: &Ball) -> Mtv {
    let delta = b2.center - b1.center;

    if delta.is_zero() {
        return Mtv::new(Vector::y(), b1.radius.min(b2.radius));
    }

    let distance = delta.norm();
    let radii = b1.radius + b2.radius;

    if distance > radii {
        return Mtv::zero();
    }

    Mtv::new(-delta / distance, radii - distance)
}
