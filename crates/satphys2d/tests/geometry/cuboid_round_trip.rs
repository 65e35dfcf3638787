use approx::assert_relative_eq;
use satphys2d::bounding_volume::Aabb;
use satphys2d::math::{Point, Vector};
use satphys2d::shape::{ColliderShape, Cuboid};

use crate::random_point;

#[test]
fn cuboid_vertices_match_their_aabb() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let mins = random_point(&mut rng, 100.0);
        let size = Vector::new(0.1 + rng.rand_float() * 50.0, 0.1 + rng.rand_float() * 50.0);
        let aabb = Aabb::new(mins, mins + size);
        let cuboid = ColliderShape::from(Cuboid::new(&aabb, 0.0));
        let pts = cuboid.vertices();

        assert_eq!(pts.len(), 4);
        let centroid = pts.iter().fold(Point::origin(), |c, p| c + p.coords / 4.0);
        assert_relative_eq!(centroid, aabb.center(), epsilon = 1.0e-3);

        for i in 0..4 {
            let edge_length = (pts[(i + 1) % 4] - pts[i]).norm();
            let expected = if i % 2 == 0 { aabb.width() } else { aabb.height() };
            assert_relative_eq!(edge_length, expected, epsilon = 1.0e-3);
        }

        assert_relative_eq!(cuboid.aabb(), aabb, epsilon = 1.0e-3);
    }
}

#[test]
fn rotation_round_trip() {
    let aabb = Aabb::new(Point::new(-3.0, -1.0), Point::new(5.0, 1.0));
    let mut cuboid = Cuboid::new(&aabb, 0.0);

    for angle in [30.0, 75.0, 180.0, -45.0, 0.0] {
        cuboid.set_rotation(angle);
        assert_relative_eq!(cuboid.rotation(), angle);
        assert_relative_eq!(cuboid.aabb().center(), aabb.center(), epsilon = 1.0e-4);
    }

    // Back to the original rotation: the vertices are the original ones.
    for (pt, expected) in cuboid.points().iter().zip(Cuboid::new(&aabb, 0.0).points()) {
        assert_relative_eq!(*pt, *expected, epsilon = 1.0e-4);
    }
}
