//! Rigid bodies, their colliders, and the set storing them.

pub use self::collider::Collider;
pub use self::integrator::{integrate, integrate_position, integrate_velocity};
pub use self::rigid_body::RigidBody;
pub use self::rigid_body_set::{RigidBodyHandle, RigidBodySet};

mod collider;
mod integrator;
mod rigid_body;
mod rigid_body_set;
