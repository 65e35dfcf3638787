use macroquad::prelude::*;
use satphys2d::prelude::*;

const RENDER_SCALE: f32 = 1.5;
const HALF_WIDTH: Real = 200.0;
const HALF_HEIGHT: Real = 150.0;

fn mquad_from_na(pt: Point<Real>, render_pos: Vec2) -> Vec2 {
    // The physics world is y-up, the screen is y-down.
    Vec2::new(pt.x, -pt.y) * RENDER_SCALE + render_pos
}

fn draw_collider(collider: &Collider, render_pos: Vec2, color: Color) {
    match collider.shape() {
        ColliderShape::Ball(ball) => {
            let center = mquad_from_na(ball.center, render_pos);
            draw_circle_lines(center.x, center.y, ball.radius * RENDER_SCALE, 2.0, color);
        }
        shape => {
            let pts = shape.vertices();
            for (i, a) in pts.iter().enumerate() {
                let a = mquad_from_na(*a, render_pos);
                let b = mquad_from_na(pts[(i + 1) % pts.len()], render_pos);
                draw_line(a.x, a.y, b.x, b.y, 2.0, color);
            }
        }
    }
}

#[macroquad::main("bouncing_balls2d")]
async fn main() {
    let render_pos = Vec2::new(screen_width() / 2.0, screen_height() / 2.0);
    let mut bodies = RigidBodySet::new();
    let mut world = PhysicsWorld::with_gravity(Vector::zeros());
    let mut rng = oorandom::Rand32::new(1234);

    /*
     * Walls.
     */
    let walls = [
        (Point::new(0.0, -HALF_HEIGHT), Vector::new(2.0 * HALF_WIDTH, 10.0)),
        (Point::new(0.0, HALF_HEIGHT), Vector::new(2.0 * HALF_WIDTH, 10.0)),
        (Point::new(-HALF_WIDTH, 0.0), Vector::new(10.0, 2.0 * HALF_HEIGHT)),
        (Point::new(HALF_WIDTH, 0.0), Vector::new(10.0, 2.0 * HALF_HEIGHT)),
    ];

    for (center, size) in walls {
        let wall = RigidBody::new(center)
            .with_kinematic(true)
            .with_collider(Collider::cuboid_from_center(center, size));
        world.add_body(bodies.insert(wall));
    }

    // A spinning box in the middle.
    let spinner = bodies.insert(
        RigidBody::new(Point::origin())
            .with_kinematic(true)
            .with_collider(Collider::cuboid_from_center(Point::origin(), Vector::new(60.0, 10.0))),
    );
    world.add_body(spinner);

    /*
     * Balls.
     */
    for i in 0..12 {
        let position = Point::new(-150.0 + 25.0 * i as Real, 80.0 - 12.0 * (i % 3) as Real);
        let velocity = Vector::new(rng.rand_float() - 0.5, rng.rand_float() - 0.5) * 200.0;
        let ball = RigidBody::new(position)
            .with_mass(1.0 + rng.rand_float())
            .with_velocity(velocity)
            .with_collider(Collider::ball(position, 8.0));
        world.add_body(bodies.insert(ball));
    }

    let mut events = EventCollector::new();

    loop {
        clear_background(BLACK);

        bodies[spinner].rotation = get_time() as Real * 45.0;
        bodies[spinner].update();

        world.step(&mut bodies, get_frame_time().min(1.0 / 30.0), &mut events);
        let num_events = events.drain().count();

        for (_, body) in bodies.iter() {
            let color = if body.is_kinematic { GRAY } else { GREEN };
            if let Some(collider) = body.collider() {
                draw_collider(collider, render_pos, color);
            }
        }

        draw_text(
            &format!("collision events: {num_events}"),
            10.0,
            30.0,
            24.0,
            WHITE,
        );
        next_frame().await
    }
}
