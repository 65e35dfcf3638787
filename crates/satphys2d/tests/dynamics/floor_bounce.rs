use satphys2d::prelude::*;

const FLOOR_TOP: Real = 5.0;
const RADIUS: Real = 10.0;

#[test]
fn ball_bounces_on_kinematic_floor() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::new();
    assert_eq!(world.gravity(), Vector::new(0.0, -9.81));

    let floor_aabb = Aabb::new(Point::new(-250.0, -5.0), Point::new(250.0, FLOOR_TOP));
    let floor = bodies.insert(
        RigidBody::new(floor_aabb.center())
            .with_kinematic(true)
            .with_collider(Collider::cuboid(&floor_aabb)),
    );
    let ball = bodies.insert(
        RigidBody::new(Point::new(0.0, 100.0))
            .with_collider(Collider::ball(Point::new(0.0, 100.0), RADIUS)),
    );
    world.add_body(floor);
    world.add_body(ball);

    let dt = 0.05;
    let mut events = EventCollector::new();
    let mut bounced = false;

    for _ in 0..400 {
        let falling = bodies[ball].velocity.y < 0.0;
        world.step(&mut bodies, dt, &mut events);
        let hit = events.drain().any(|e| e.body == ball);

        // Overlaps are resolved within the step they are detected.
        assert!(bodies[ball].position.y - RADIUS >= FLOOR_TOP - 1.0e-3);

        if hit {
            assert!(falling);
            assert!(bodies[ball].velocity.y >= 0.0);
            bounced = true;
        }
    }

    assert!(bounced);
    assert_eq!(bodies[floor].position, floor_aabb.center());
    assert_eq!(bodies[floor].velocity, Vector::zeros());
}

#[test]
fn gravity_scales_with_mass() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::new(0.0, -10.0));
    let light = bodies.insert(RigidBody::new(Point::origin()));
    let heavy = bodies.insert(RigidBody::new(Point::new(5.0, 0.0)).with_mass(2.0));
    let floating = bodies.insert(RigidBody::new(Point::new(10.0, 0.0)).with_use_gravity(false));
    world.add_body(light);
    world.add_body(heavy);
    world.add_body(floating);

    world.step(&mut bodies, 0.5, &mut ());

    assert_eq!(bodies[light].velocity, Vector::new(0.0, -5.0));
    assert_eq!(bodies[heavy].velocity, Vector::new(0.0, -10.0));
    assert_eq!(bodies[heavy].position, Point::new(5.0, -5.0));
    assert_eq!(bodies[floating].position, Point::new(10.0, 0.0));
}
