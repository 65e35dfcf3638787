use crate::math::{Real, Vector};
use crate::query::Mtv;
use crate::shape::AxisProjection;

/// The length of the overlap of the projections of two shapes on `axis`.
///
/// The result is negative if the projections are disjoint, in which case `axis` is a
/// separating axis. It is zero if they only touch.
#[inline]
pub fn compute_overlap_wrt_axis<S1, S2>(shape1: &S1, shape2: &S2, axis: &Vector<Real>) -> Real
where
    S1: ?Sized + AxisProjection,
    S2: ?Sized + AxisProjection,
{
    let (min1, max1) = shape1.project_on_axis(axis);
    let (min2, max2) = shape2.project_on_axis(axis);
    (max1 - min2).min(max2 - min1)
}

/// Finds, among `axes`, the one along which the two shapes overlap the least.
///
/// Axes are tested in order. As soon as one of them separates the shapes, [`Mtv::zero`]
/// is returned without testing the others. Otherwise the result carries the first axis
/// that reached the smallest overlap, with its sign unchanged.
///
/// Returns [`Mtv::zero`] if `axes` is empty.
pub fn find_min_overlap<'a, S1, S2>(
    shape1: &S1,
    shape2: &S2,
    axes: impl IntoIterator<Item = &'a Vector<Real>>,
) -> Mtv
where
    S1: ?Sized + AxisProjection,
    S2: ?Sized + AxisProjection,
{
    let mut smallest_overlap = Real::MAX;
    let mut result = Mtv::zero();

    for axis in axes {
        let overlap = compute_overlap_wrt_axis(shape1, shape2, axis);

        if overlap < 0.0 {
            return Mtv::zero();
        }

        if overlap < smallest_overlap {
            smallest_overlap = overlap;
            result = Mtv::new(*axis, overlap);
        }
    }

    result
}
