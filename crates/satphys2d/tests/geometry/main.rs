mod ball_ball_symmetry;
mod cuboid_round_trip;
mod disjoint_shapes;
mod sat_minimality;

use satphys2d::math::{Point, Real, Vector};
use satphys2d::shape::ConvexPolygon;
use std::f32::consts::TAU;

/// A random regular polygon, wound clockwise, with a random orientation.
pub fn random_regular_polygon(rng: &mut oorandom::Rand32, center: Point<Real>) -> ConvexPolygon {
    let num_points = 3 + rng.rand_range(0..6) as usize;
    let radius = 1.0 + rng.rand_float() * 10.0;
    let phase = rng.rand_float() * TAU;

    let points = (0..num_points)
        .map(|i| {
            let angle = phase - TAU * i as Real / num_points as Real;
            center + Vector::new(angle.cos(), angle.sin()) * radius
        })
        .collect();

    ConvexPolygon::new(points).unwrap()
}

pub fn random_point(rng: &mut oorandom::Rand32, extent: Real) -> Point<Real> {
    Point::new(
        (rng.rand_float() - 0.5) * 2.0 * extent,
        (rng.rand_float() - 0.5) * 2.0 * extent,
    )
}
