use crate::math::{Point, Real, Vector};
use crate::utils::{normalize_or_up, perp};

/// Computes the normal of the edge going from `pts[0]` to `pts[1]`.
///
/// This is the clockwise perpendicular of the normalized `pts[0] - pts[1]`, which points
/// outward for polygons wound clockwise. A degenerate edge gets the perpendicular of
/// the "up" direction instead of a NaN.
#[inline]
pub fn cw_edge_normal(pts: [&Point<Real>; 2]) -> Vector<Real> {
    perp(&normalize_or_up(&(*pts[0] - *pts[1])))
}
