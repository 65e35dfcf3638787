use crate::math::{Point, Real, Vector};

/// Tests if the given point lies behind every edge of a convex polygon.
///
/// `normals[i]` must be the normal of the edge starting at `points[i]`. The test is only
/// meaningful if the normals point outward, which requires a consistent winding of the
/// polygon (clockwise for normals computed with [`crate::utils::cw_edge_normal`]). Points
/// on the boundary are considered inside.
pub fn point_in_convex_poly2d(
    pt: &Point<Real>,
    points: &[Point<Real>],
    normals: &[Vector<Real>],
) -> bool {
    if points.is_empty() {
        return false;
    }

    points
        .iter()
        .zip(normals.iter())
        .all(|(vtx, normal)| (pt - vtx).dot(normal) <= 0.0)
}

/// Twice the signed area of a closed polygon.
///
/// The result is negative for polygons wound clockwise (in a y-up frame) and positive
/// for counter-clockwise ones.
pub fn signed_area2d(points: &[Point<Real>]) -> Real {
    let mut area = 0.0;

    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        area += a.x * b.y - b.x * a.y;
    }

    area
}
