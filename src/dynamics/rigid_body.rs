use crate::dynamics::{Collider, RigidBodyHandle};
use crate::math::{Point, Real, Vector};

/// A body moved by the physics world.
///
/// Bodies only translate: their `rotation` is never integrated, but it orients their
/// box collider. A body owns at most one [`Collider`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// The position of this body in world-space.
    pub position: Point<Real>,
    /// The rotation of this body, in degrees.
    pub rotation: Real,
    /// The mass of this body.
    pub mass: Real,
    /// The linear velocity of this body.
    pub velocity: Vector<Real>,
    /// Is this body affected by the gravity of the world?
    pub use_gravity: bool,
    /// Kinematic bodies are neither integrated nor pushed out of other bodies.
    ///
    /// They still collide with, and reflect, other bodies.
    pub is_kinematic: bool,
    collider: Option<Collider>,
    handle: Option<RigidBodyHandle>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(Point::origin())
    }
}

impl RigidBody {
    /// A dynamic body at `position` with unit mass, affected by gravity.
    pub fn new(position: Point<Real>) -> Self {
        Self {
            position,
            rotation: 0.0,
            mass: 1.0,
            velocity: Vector::zeros(),
            use_gravity: true,
            is_kinematic: false,
            collider: None,
            handle: None,
        }
    }

    /// Sets the rotation of this body, in degrees.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Real) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the mass of this body.
    #[must_use]
    pub fn with_mass(mut self, mass: Real) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the initial velocity of this body.
    #[must_use]
    pub fn with_velocity(mut self, velocity: Vector<Real>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets whether this body is affected by gravity.
    #[must_use]
    pub fn with_use_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self
    }

    /// Sets whether this body is kinematic.
    #[must_use]
    pub fn with_kinematic(mut self, is_kinematic: bool) -> Self {
        self.is_kinematic = is_kinematic;
        self
    }

    /// Attaches `collider` to this body.
    #[must_use]
    pub fn with_collider(mut self, collider: Collider) -> Self {
        let _ = self.set_collider(Some(collider));
        self
    }

    /// The handle of this body, if it is part of a [`RigidBodySet`](crate::dynamics::RigidBodySet).
    #[inline]
    pub fn handle(&self) -> Option<RigidBodyHandle> {
        self.handle
    }

    pub(crate) fn set_handle(&mut self, handle: Option<RigidBodyHandle>) {
        self.handle = handle;

        if let Some(collider) = &mut self.collider {
            collider.set_parent(handle);
        }
    }

    /// The collider attached to this body.
    #[inline]
    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    /// A mutable reference to the collider attached to this body.
    #[inline]
    pub fn collider_mut(&mut self) -> Option<&mut Collider> {
        self.collider.as_mut()
    }

    /// Replaces the collider of this body, returning the previous one.
    ///
    /// The previous collider is detached from this body and the new one is attached to it.
    pub fn set_collider(&mut self, collider: Option<Collider>) -> Option<Collider> {
        let mut previous = std::mem::replace(&mut self.collider, collider);

        if let Some(previous) = &mut previous {
            previous.set_parent(None);
        }

        if let Some(collider) = &mut self.collider {
            collider.set_parent(self.handle);
        }

        log::debug!(
            "Collider of body {:?} changed from {:?} to {:?}.",
            self.handle,
            previous.as_ref().map(|c| c.shape().shape_type()),
            self.collider.as_ref().map(|c| c.shape().shape_type()),
        );

        previous
    }

    /// Moves the attached collider to the pose of this body.
    ///
    /// See [`Collider::update`].
    pub fn update(&mut self) {
        if let Some(collider) = &mut self.collider {
            collider.update(&self.position, self.rotation);
        }
    }

    /// Moves the center of the attached collider to the position of this body.
    pub fn sync_collider_center(&mut self) {
        if let Some(collider) = &mut self.collider {
            collider.set_center(self.position);
        }
    }
}
