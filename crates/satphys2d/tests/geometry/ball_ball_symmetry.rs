use approx::assert_relative_eq;
use satphys2d::math::{Point, Vector};
use satphys2d::query;
use satphys2d::shape::{Ball, ColliderShape};

use crate::random_point;

#[test]
fn ball_ball_overlap_is_symmetric() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..1000 {
        let mut random_ball = || -> ColliderShape {
            Ball::new(random_point(&mut rng, 20.0), 0.5 + rng.rand_float() * 10.0).into()
        };
        let b1 = random_ball();
        let b2 = random_ball();

        let mtv12 = query::overlap(&b1, &b2);
        let mtv21 = query::overlap(&b2, &b1);

        assert_eq!(mtv12.is_collision(), mtv21.is_collision());
        assert_relative_eq!(mtv12.value, mtv21.value, epsilon = 1.0e-4);
        assert_relative_eq!(mtv12.axis, -mtv21.axis, epsilon = 1.0e-4);
    }
}

#[test]
fn concentric_balls_push_up() {
    let b1: ColliderShape = Ball::new(Point::new(4.0, 4.0), 3.0).into();
    let b2: ColliderShape = Ball::new(Point::new(4.0, 4.0), 1.0).into();

    for mtv in [query::overlap(&b1, &b2), query::overlap(&b2, &b1)] {
        assert_eq!(mtv.axis, Vector::y());
        assert_eq!(mtv.value, 1.0);
    }
}
