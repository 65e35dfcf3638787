use approx::assert_relative_eq;
use satphys2d::prelude::*;

#[test]
fn equal_masses_exchange_velocities() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::zeros());

    let a = bodies.insert(
        RigidBody::new(Point::origin())
            .with_velocity(Vector::new(10.0, 0.0))
            .with_collider(Collider::ball(Point::origin(), 10.0)),
    );
    let b = bodies.insert(
        RigidBody::new(Point::new(25.0, 0.0))
            .with_velocity(Vector::new(-10.0, 0.0))
            .with_collider(Collider::ball(Point::new(25.0, 0.0), 10.0)),
    );
    world.add_body(a);
    world.add_body(b);

    let mut events = EventCollector::new();
    world.step(&mut bodies, 1.0, &mut events);

    assert_relative_eq!(bodies[a].velocity, Vector::new(-10.0, 0.0));
    assert_relative_eq!(bodies[b].velocity, Vector::new(10.0, 0.0));

    // Integrated to 10 and 15, pushed apart by 15, then integrated once more.
    assert_relative_eq!(bodies[a].position, Point::new(-15.0, 0.0));
    assert_relative_eq!(bodies[b].position, Point::new(40.0, 0.0));
    assert_relative_eq!(
        bodies[a].collider().unwrap().center(),
        Point::new(-15.0, 0.0)
    );

    // The reversed pair no longer overlaps once the first one is resolved.
    assert_eq!(events.events.len(), 2);
    let event = events.events[0];
    assert_eq!(event.kind, CollisionEventKind::Collision);
    assert_eq!((event.body, event.other), (a, b));
    assert_relative_eq!(event.mtv, Mtv::new(-Vector::x(), 15.0));
    assert_eq!((events.events[1].body, events.events[1].other), (b, a));
    assert_relative_eq!(events.events[1].mtv, Mtv::new(Vector::x(), 15.0));
}

#[test]
fn heavier_body_keeps_going() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::zeros());

    let heavy = bodies.insert(
        RigidBody::new(Point::origin())
            .with_mass(3.0)
            .with_velocity(Vector::new(4.0, 0.0))
            .with_collider(Collider::cuboid_from_center(Point::origin(), Vector::new(2.0, 2.0))),
    );
    let light = bodies.insert(
        RigidBody::new(Point::new(2.5, 0.0))
            .with_collider(Collider::cuboid_from_center(Point::new(2.5, 0.0), Vector::new(2.0, 2.0))),
    );
    world.add_body(heavy);
    world.add_body(light);
    world.step(&mut bodies, 0.25, &mut ());

    // (4 * (3 - 1) + 0) / 4 and (0 + 2 * 3 * 4) / 4.
    assert_relative_eq!(bodies[heavy].velocity, Vector::new(2.0, 0.0));
    assert_relative_eq!(bodies[light].velocity, Vector::new(6.0, 0.0));
    assert!(bodies[light].position.x > bodies[heavy].position.x + 2.0);
}
