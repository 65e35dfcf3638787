use crate::dynamics::{integrate, RigidBodyHandle, RigidBodySet};
use crate::math::{Real, Vector};
use crate::pipeline::{
    pair_overlap, resolve_collision, BroadPhase, BroadPhaseBruteForce, CollisionEvent,
    CollisionEventKind, EventHandler,
};

/// The registry of the bodies simulated together, and the step advancing them.
///
/// The world doesn't own any body: it keeps the handles of the bodies registered with
/// [`PhysicsWorld::add_body`], which live in a [`RigidBodySet`] passed to each step.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use satphys2d::prelude::*;
///
/// let mut bodies = RigidBodySet::new();
/// let mut world = PhysicsWorld::new();
///
/// let floor = bodies.insert(
///     RigidBody::new(Point::origin())
///         .with_kinematic(true)
///         .with_collider(Collider::cuboid_from_center(Point::origin(), Vector::new(500.0, 10.0))),
/// );
/// let ball = bodies.insert(
///     RigidBody::new(Point::new(0.0, 30.0))
///         .with_collider(Collider::ball(Point::new(0.0, 30.0), 10.0)),
/// );
/// world.add_body(floor);
/// world.add_body(ball);
///
/// let mut events = EventCollector::new();
/// for _ in 0..100 {
///     world.step(&mut bodies, 0.1, &mut events);
/// }
///
/// assert!(!events.events.is_empty());
/// assert_eq!(bodies[floor].position, Point::origin());
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    bodies: Option<Vec<RigidBodyHandle>>,
    broad_phase: BroadPhaseBruteForce,
    pairs: Vec<(RigidBodyHandle, RigidBodyHandle)>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// The gravity of a new world.
    pub const DEFAULT_GRAVITY: [Real; 2] = [0.0, -9.81];

    /// Creates a world with the default gravity.
    ///
    /// The world isn't initialized: see [`PhysicsWorld::init`].
    pub fn new() -> Self {
        Self::with_gravity(Self::DEFAULT_GRAVITY.into())
    }

    /// Creates a world with the given gravity.
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        Self {
            gravity,
            bodies: None,
            broad_phase: BroadPhaseBruteForce,
            pairs: vec![],
        }
    }

    /// Allocates the list of registered bodies.
    ///
    /// Calling this on an initialized world logs a warning and does nothing else.
    pub fn init(&mut self) {
        if self.bodies.is_some() {
            log::warn!("PhysicsWorld::init called on an already initialized world.");
            return;
        }

        self.bodies = Some(vec![]);
    }

    /// Was [`PhysicsWorld::init`] called?
    pub fn is_initialized(&self) -> bool {
        self.bodies.is_some()
    }

    fn registered_mut(&mut self) -> &mut Vec<RigidBodyHandle> {
        self.bodies.get_or_insert_with(Vec::new)
    }

    /// Registers a body, initializing the world if needed.
    ///
    /// Returns `false` if the body was already registered.
    pub fn add_body(&mut self, handle: RigidBodyHandle) -> bool {
        let registered = self.registered_mut();

        if registered.contains(&handle) {
            log::debug!("Body {:?} is already registered.", handle);
            return false;
        }

        registered.push(handle);
        true
    }

    /// Deregisters a body, initializing the world if needed.
    ///
    /// Returns `false` if the body wasn't registered.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        let registered = self.registered_mut();

        match registered.iter().position(|h| *h == handle) {
            Some(i) => {
                let _ = registered.remove(i);
                true
            }
            None => {
                log::debug!("Body {:?} is not registered.", handle);
                false
            }
        }
    }

    /// The handles of the registered bodies, in registration order.
    pub fn body_handles(&self) -> &[RigidBodyHandle] {
        self.bodies.as_deref().unwrap_or(&[])
    }

    /// The gravity applied to the bodies of this world.
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Sets the gravity applied to the bodies of this world.
    pub fn set_gravity(&mut self, gravity: Vector<Real>) {
        self.gravity = gravity;
    }

    /// Advances the registered bodies by `dt`.
    ///
    /// Does nothing if the world isn't initialized. Otherwise, using the bodies registered
    /// when the step starts:
    /// 1. Every non-kinematic body is integrated, then its collider follows it.
    /// 2. The broad-phase lists every ordered pair of distinct bodies with a collider.
    /// 3. For each pair, in order, overlapping solid colliders are pushed apart with
    ///    [`resolve_collision`], and both bodies are reported to `events`.
    ///
    /// Pairs are resolved one after the other, so a pair sees the positions corrected by
    /// the pairs before it. Handles that are no longer in `bodies` are skipped.
    pub fn step(&mut self, bodies: &mut RigidBodySet, dt: Real, events: &mut dyn EventHandler) {
        let Some(registered) = &self.bodies else {
            return;
        };
        let handles = registered.clone();

        for handle in &handles {
            let Some(body) = bodies.get_mut(*handle) else {
                log::debug!("Skipping stale body handle {:?}.", handle);
                continue;
            };

            if body.is_kinematic {
                continue;
            }

            integrate(body, &self.gravity, dt);
            body.update();
            body.sync_collider_center();
        }

        self.pairs.clear();
        self.broad_phase.find_pairs(&handles, bodies, &mut self.pairs);
        log::trace!("{} candidate pairs.", self.pairs.len());

        for (handle1, handle2) in self.pairs.iter().copied() {
            let overlap = match (bodies.get(handle1), bodies.get(handle2)) {
                (Some(body1), Some(body2)) => pair_overlap(body1, body2),
                _ => None,
            };
            let Some(overlap) = overlap else {
                continue;
            };

            if !overlap.is_trigger {
                resolve_collision(bodies, handle1, handle2, &overlap.mtv, dt);
            }

            let kind = if overlap.is_trigger {
                CollisionEventKind::Trigger
            } else {
                CollisionEventKind::Collision
            };

            events.handle_collision_event(
                bodies,
                CollisionEvent {
                    kind,
                    body: handle1,
                    other: handle2,
                    mtv: overlap.mtv,
                },
            );
            events.handle_collision_event(
                bodies,
                CollisionEvent {
                    kind,
                    body: handle2,
                    other: handle1,
                    mtv: overlap.mtv.flipped(),
                },
            );
        }
    }
}
