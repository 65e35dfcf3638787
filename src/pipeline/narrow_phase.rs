use crate::dynamics::{integrate_position, RigidBody, RigidBodyHandle, RigidBodySet};
use crate::math::{Real, Vector};
use crate::query::Mtv;
use crate::utils;

/// The exact overlap between the colliders of two bodies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PairOverlap {
    /// The minimum translation vector, with its axis pointing from the second body
    /// toward the first one.
    pub mtv: Mtv,
    /// Is any of the two colliders a trigger?
    pub is_trigger: bool,
}

/// Computes the overlap between the colliders of `body1` and `body2`.
///
/// Returns `None` if any of the two bodies has no collider, or if the colliders don't
/// overlap. The axis of the result is oriented from the center of the collider of
/// `body2` toward the center of the collider of `body1`.
pub fn pair_overlap(body1: &RigidBody, body2: &RigidBody) -> Option<PairOverlap> {
    let collider1 = body1.collider()?;
    let collider2 = body2.collider()?;
    let mtv = collider1.overlap(collider2);

    if !mtv.is_collision() {
        return None;
    }

    Some(PairOverlap {
        mtv: mtv.oriented_towards(&(collider1.center() - collider2.center())),
        is_trigger: collider1.is_trigger() || collider2.is_trigger(),
    })
}

// 1D elastic collision.
fn elastic_response(v1: &Vector<Real>, m1: Real, v2: &Vector<Real>, m2: Real) -> Vector<Real> {
    (v1 * (m1 - m2) + v2 * (2.0 * m2)) / (m1 + m2)
}

/// Pushes two overlapping bodies apart and updates their velocities.
///
/// `mtv.axis` must point from `handle2` toward `handle1`, as returned by [`pair_overlap`].
/// Each non-kinematic body is:
/// 1. Moved along the axis by `mtv.value`, away from the other body.
/// 2. Given a new velocity: reflected off the axis if the other body is kinematic, or
///    computed from a 1D elastic collision otherwise. Both bodies use the velocities
///    they had before this call.
/// 3. Moved once more by its new velocity times `dt`, then its collider is synced.
///
/// Does nothing if the handles are equal or invalid.
pub fn resolve_collision(
    bodies: &mut RigidBodySet,
    handle1: RigidBodyHandle,
    handle2: RigidBodyHandle,
    mtv: &Mtv,
    dt: Real,
) {
    let Some((body1, body2)) = bodies.get_pair_mut(handle1, handle2) else {
        return;
    };

    let (v1, v2) = (body1.velocity, body2.velocity);
    let (m1, m2) = (body1.mass, body2.mass);
    let translation = mtv.translation();

    if !body1.is_kinematic {
        body1.position += translation;

        if body2.is_kinematic {
            utils::reflect(&mut body1.velocity, &mtv.axis);
        } else {
            body1.velocity = elastic_response(&v1, m1, &v2, m2);
        }

        integrate_position(body1, dt);
        body1.update();
        body1.sync_collider_center();
    }

    if !body2.is_kinematic {
        body2.position -= translation;

        if body1.is_kinematic {
            utils::reflect(&mut body2.velocity, &mtv.axis);
        } else {
            body2.velocity = elastic_response(&v2, m2, &v1, m1);
        }

        integrate_position(body2, dt);
        body2.update();
        body2.sync_collider_center();
    }
}
