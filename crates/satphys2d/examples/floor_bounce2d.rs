use satphys2d::prelude::*;

fn main() {
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::new();

    let floor_aabb = Aabb::new(Point::new(-250.0, -5.0), Point::new(250.0, 5.0));
    let floor = bodies.insert(
        RigidBody::new(floor_aabb.center())
            .with_kinematic(true)
            .with_collider(Collider::cuboid(&floor_aabb)),
    );
    let ball = bodies.insert(
        RigidBody::new(Point::new(0.0, 100.0))
            .with_collider(Collider::ball(Point::new(0.0, 100.0), 10.0)),
    );
    world.add_body(floor);
    world.add_body(ball);

    let dt = 1.0 / 60.0;
    let mut events = EventCollector::new();

    for frame in 0..600 {
        world.step(&mut bodies, dt, &mut events);

        for event in events.drain().filter(|e| e.body == ball) {
            println!(
                "frame {frame}: {:?} with the floor, depth {:.3}, vertical velocity after {:.3}",
                event.kind, event.mtv.value, bodies[ball].velocity.y,
            );
        }
    }

    let position = bodies[ball].position;
    println!("Final ball position: ({:.3}, {:.3})", position.x, position.y);
}
