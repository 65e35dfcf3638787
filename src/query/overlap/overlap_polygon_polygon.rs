use crate::query::sat;
use crate::query::Mtv;
use crate::shape::ConvexPolygon;

/// Overlap between two convex polygons.
///
/// The edge normals of both polygons are tested, starting with those of the polygon
/// that has strictly fewer vertices (`p2` goes first if they have as many). The sign
/// of the resulting axis is the one of the normal it came from.
pub fn overlap_polygon_polygon(p1: &ConvexPolygon, p2: &ConvexPolygon) -> Mtv {
    let (first, second) = if p1.num_points() < p2.num_points() {
        (p1, p2)
    } else {
        (p2, p1)
    };

    let axes = first.normals().iter().chain(second.normals());
    sat::find_min_overlap(p1, p2, axes)
}
