//! Application of the Separating Axis Theorem (SAT).
//!
//! Two convex shapes don't intersect if and only if there is an axis on which their
//! projections are disjoint. For polygons it is enough to test the normals of their
//! edges. Balls contribute no axis of their own.
//!
//! Among the tested axes, the one with the smallest projected overlap gives the
//! minimum translation vector ([`Mtv`](crate::query::Mtv)) separating the shapes.

pub use self::sat_axis::{compute_overlap_wrt_axis, find_min_overlap};

mod sat_axis;
