//! Explicit time integration of rigid bodies.

use crate::dynamics::RigidBody;
use crate::math::{Real, Vector};

/// Applies gravity to the velocity of `body`.
///
/// Kinematic bodies and bodies that don't use gravity are left untouched. The velocity
/// change is `gravity * mass * dt`: heavier bodies accelerate faster.
pub fn integrate_velocity(body: &mut RigidBody, gravity: &Vector<Real>, dt: Real) {
    if body.is_kinematic || !body.use_gravity {
        return;
    }

    body.velocity += gravity * (body.mass * dt);
}

/// Moves a non-kinematic `body` along its velocity.
pub fn integrate_position(body: &mut RigidBody, dt: Real) {
    if body.is_kinematic {
        return;
    }

    body.position += body.velocity * dt;
}

/// Integrates the velocity, then the position, of `body`.
pub fn integrate(body: &mut RigidBody, gravity: &Vector<Real>, dt: Real) {
    integrate_velocity(body, gravity, dt);
    integrate_position(body, dt);
}
