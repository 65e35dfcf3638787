use crate::math::{Point, Real, Vector};

/// Projects a cloud of points on `axis`, returning the `(min, max)` of all the dot products.
///
/// An empty cloud yields the inverted interval `(Real::MAX, -Real::MAX)`.
#[inline]
pub fn point_cloud_projection(axis: &Vector<Real>, points: &[Point<Real>]) -> (Real, Real) {
    let mut min = Real::MAX;
    let mut max = -Real::MAX;

    for p in points {
        let proj = p.coords.dot(axis);
        min = min.min(proj);
        max = max.max(proj);
    }

    (min, max)
}

/// Computes the index of the point of the cloud closest to `pt`.
///
/// Ties are resolved in favor of the lowest index.
#[inline]
pub fn point_cloud_closest_point_id(pt: &Point<Real>, points: &[Point<Real>]) -> usize {
    let mut best_pt = 0;
    let mut best_dist = Real::MAX;

    for (i, p) in points.iter().enumerate() {
        let dist = (p - pt).norm_squared();

        if dist < best_dist {
            best_dist = dist;
            best_pt = i;
        }
    }

    best_pt
}
