use approx::assert_relative_eq;
use satphys2d::prelude::*;

#[test]
fn triggers_report_without_resolution() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::zeros());

    let sensor = bodies.insert(
        RigidBody::new(Point::origin())
            .with_kinematic(true)
            .with_collider(
                Collider::cuboid_from_center(Point::origin(), Vector::new(10.0, 10.0))
                    .with_trigger(true),
            ),
    );
    let ball = bodies.insert(
        RigidBody::new(Point::new(2.0, 0.0))
            .with_velocity(Vector::new(1.0, 0.0))
            .with_collider(Collider::ball(Point::new(2.0, 0.0), 1.0)),
    );
    world.add_body(sensor);
    world.add_body(ball);

    let mut events = EventCollector::new();
    world.step(&mut bodies, 1.0, &mut events);

    // Only integrated.
    assert_eq!(bodies[ball].position, Point::new(3.0, 0.0));
    assert_eq!(bodies[ball].velocity, Vector::new(1.0, 0.0));

    // Both ordered pairs still overlap: two events per body.
    assert_eq!(events.events.len(), 4);
    assert!(events.events.iter().all(CollisionEvent::is_trigger));
    assert_eq!(events.events_for(sensor).count(), 2);
    assert!(events.events_for(ball).all(|e| e.other == sensor));
}

#[test]
fn kinematic_bodies_collide_but_do_not_move() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::zeros());

    let wall = bodies.insert(
        RigidBody::new(Point::new(5.0, 0.0))
            .with_kinematic(true)
            .with_velocity(Vector::new(-1.0, 0.0))
            .with_collider(Collider::segment(Point::new(5.0, -5.0), Point::new(5.0, 5.0))),
    );
    let ball = bodies.insert(
        RigidBody::new(Point::new(3.5, 0.0))
            .with_velocity(Vector::new(2.0, 0.0))
            .with_collider(Collider::ball(Point::new(3.5, 0.0), 1.0)),
    );
    world.add_body(ball);
    world.add_body(wall);

    let mut events = EventCollector::new();
    world.step(&mut bodies, 0.5, &mut events);

    assert_eq!(bodies[wall].position, Point::new(5.0, 0.0));
    assert_eq!(bodies[wall].velocity, Vector::new(-1.0, 0.0));
    assert_relative_eq!(bodies[ball].velocity, Vector::new(-2.0, 0.0));
    // Pushed back by 0.5, then moved by the reflected velocity.
    assert_relative_eq!(bodies[ball].position, Point::new(3.0, 0.0));
    assert!(!events.events.is_empty());
    assert!(events.events.iter().all(|e| e.kind == CollisionEventKind::Collision));
}
