use approx::assert_relative_eq;
use satphys2d::query::{self, sat};
use satphys2d::shape::ColliderShape;

use crate::{random_point, random_regular_polygon};

#[test]
fn mtv_is_the_smallest_axis_overlap() {
    let mut rng = oorandom::Rand32::new(7);
    let mut num_collisions = 0;

    for _ in 0..2000 {
        let c_p1 = random_point(&mut rng, 10.0);
        let p1 = random_regular_polygon(&mut rng, c_p1);
        let c_p2 = random_point(&mut rng, 10.0);
        let p2 = random_regular_polygon(&mut rng, c_p2);
        let mtv = query::overlap(&p1.clone().into(), &ColliderShape::from(p2.clone()));

        if !mtv.is_collision() {
            continue;
        }

        num_collisions += 1;
        assert_relative_eq!(mtv.axis.norm(), 1.0, epsilon = 1.0e-4);

        let mut min_overlap = satphys2d::math::Real::MAX;
        for axis in p1.normals().iter().chain(p2.normals()) {
            let overlap = sat::compute_overlap_wrt_axis(&p1, &p2, axis);
            assert!(overlap >= 0.0);
            assert!(mtv.value <= overlap + 1.0e-4);
            min_overlap = min_overlap.min(overlap);
        }

        assert_relative_eq!(mtv.value, min_overlap, epsilon = 1.0e-4);
    }

    assert!(num_collisions > 100);
}
