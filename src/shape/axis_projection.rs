//! Traits for shapes that can be projected on an axis.

use crate::math::{Real, Vector};

/// Trait implemented by convex shapes that can be projected on an axis.
///
/// This is the only geometric operation needed by the separating-axis tests.
pub trait AxisProjection {
    /// The `(min, max)` interval covered by this shape once projected on `axis`.
    ///
    /// Each bound is a dot product with `axis`, so the interval is only expressed in
    /// world units if `axis` is normalized.
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real);
}
