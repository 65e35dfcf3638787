use satphys2d::math::{Point, Vector};
use satphys2d::query::{self, Mtv};
use satphys2d::shape::{Ball, ColliderShape, ConvexPolygon, Segment};

use crate::{random_point, random_regular_polygon};

#[test]
fn disjoint_aabbs_give_the_zero_mtv() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..1000 {
        let c_p1 = random_point(&mut rng, 10.0);
        let p1 = random_regular_polygon(&mut rng, c_p1);
        let c_p2 = random_point(&mut rng, 10.0);
        let mut p2 = random_regular_polygon(&mut rng, c_p2);

        // Move p2 to the right of p1.
        let gap = 0.01 + rng.rand_float();
        let shift = p1.aabb().maxs.x - p2.aabb().mins.x + gap;
        p2.translate(&Vector::new(shift, 0.0));
        assert!(!p1.aabb().intersects(&p2.aabb()));

        let ball = Ball::new(Point::new(p2.aabb().maxs.x + 5.0, 0.0), 4.0);
        let shapes: [ColliderShape; 3] = [p1.into(), p2.into(), ball.into()];

        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(query::overlap(&shapes[i], &shapes[j]), Mtv::zero());
                }
            }
        }
    }
}

#[test]
fn separated_within_aabbs() {
    let triangle = ConvexPolygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 4.0),
        Point::new(4.0, 0.0),
    ])
    .unwrap();
    let ball = Ball::new(Point::new(3.6, 3.6), 1.5);
    let segment = Segment::new(Point::new(2.5, 4.0), Point::new(4.0, 2.5));
    let triangle: ColliderShape = triangle.into();

    assert!(triangle.aabb().intersects(&ball.aabb()));
    assert_eq!(query::overlap(&triangle, &ball.into()), Mtv::zero());
    assert_eq!(query::overlap(&segment.into(), &triangle), Mtv::zero());
}
