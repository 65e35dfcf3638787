use satphys2d::prelude::*;

#[test]
fn lone_kinematic_body_is_left_untouched() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::zeros());
    let handle = bodies.insert(
        RigidBody::new(Point::new(3.0, 4.0))
            .with_kinematic(true)
            .with_velocity(Vector::new(1.0, -1.0))
            .with_collider(Collider::cuboid_from_center(Point::new(3.0, 4.0), Vector::new(2.0, 2.0))),
    );
    world.add_body(handle);

    let before = bodies[handle].clone();
    let mut events = EventCollector::new();
    for _ in 0..10 {
        world.step(&mut bodies, 0.1, &mut events);
    }

    assert_eq!(bodies[handle], before);
    assert!(events.events.is_empty());
}

#[test]
fn init_is_idempotent() {
    let mut bodies = RigidBodySet::new();
    let handle = bodies.insert(RigidBody::default());
    let mut world = PhysicsWorld::default();

    world.init();
    assert!(world.add_body(handle));
    // Logs a warning, and keeps the registered bodies.
    world.init();
    assert_eq!(world.body_handles(), &[handle]);
}

#[test]
fn stale_handles_are_skipped() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::new();
    let removed = bodies.insert(
        RigidBody::new(Point::origin()).with_collider(Collider::ball(Point::origin(), 1.0)),
    );
    let kept = bodies.insert(
        RigidBody::new(Point::origin()).with_collider(Collider::ball(Point::origin(), 1.0)),
    );
    world.add_body(removed);
    world.add_body(kept);
    let _ = bodies.remove(removed);

    let mut events = EventCollector::new();
    world.step(&mut bodies, 0.1, &mut events);

    assert!(events.events.is_empty());
    assert!(bodies[kept].velocity.y < 0.0);
    assert_eq!(world.body_handles(), &[removed, kept]);
}

#[test]
fn box_colliders_follow_the_body_rotation() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::zeros());
    let handle = bodies.insert(
        RigidBody::new(Point::origin())
            .with_rotation(90.0)
            .with_velocity(Vector::new(1.0, 0.0))
            .with_collider(Collider::cuboid_from_center(Point::origin(), Vector::new(4.0, 2.0))),
    );
    world.add_body(handle);
    world.step(&mut bodies, 1.0, &mut ());

    let collider = bodies[handle].collider().unwrap();
    let cuboid = collider.shape().as_cuboid().unwrap();
    assert_eq!(cuboid.rotation(), 90.0);
    approx::assert_relative_eq!(collider.center(), Point::new(1.0, 0.0), epsilon = 1.0e-5);
    approx::assert_relative_eq!(collider.aabb().extents(), Vector::new(2.0, 4.0), epsilon = 1.0e-5);
}
