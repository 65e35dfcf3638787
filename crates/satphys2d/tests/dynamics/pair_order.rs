use approx::assert_relative_eq;
use satphys2d::prelude::*;

// Three resting balls in a row, the middle one overlapping both neighbors.
fn run(order: [usize; 3]) -> ([Point<Real>; 3], usize) {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::zeros());

    let handles = [-15.0, 0.0, 15.0].map(|x| {
        bodies.insert(
            RigidBody::new(Point::new(x, 0.0)).with_collider(Collider::ball(Point::new(x, 0.0), 10.0)),
        )
    });

    for i in order {
        world.add_body(handles[i]);
    }

    let mut events = EventCollector::new();
    world.step(&mut bodies, 1.0, &mut events);

    (handles.map(|h| bodies[h].position), events.events.len())
}

#[test]
fn resolution_depends_on_registration_order() {
    // Left-middle is resolved first, then middle-right sees the corrected middle.
    let (left_first, num_events) = run([0, 1, 2]);
    assert_eq!(num_events, 4);
    assert_relative_eq!(left_first[0], Point::new(-20.0, 0.0));
    assert_relative_eq!(left_first[1], Point::new(-5.0, 0.0));
    assert_relative_eq!(left_first[2], Point::new(25.0, 0.0));

    let (right_first, num_events) = run([2, 1, 0]);
    assert_eq!(num_events, 4);
    assert_relative_eq!(right_first[0], Point::new(-25.0, 0.0));
    assert_relative_eq!(right_first[1], Point::new(5.0, 0.0));
    assert_relative_eq!(right_first[2], Point::new(20.0, 0.0));
}
