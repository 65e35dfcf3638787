use crate::math::{Point, Real, Rotation, Vector, DEFAULT_EPSILON};

/// The direction pointing a quarter turn clockwise from `v`, i.e., `(v.y, -v.x)`.
///
/// The input is left untouched.
#[inline]
pub fn perp(v: &Vector<Real>) -> Vector<Real> {
    Vector::new(v.y, -v.x)
}

/// Normalizes `v`, falling back to the `+Y` ("up") direction if `v` is too small to
/// be normalized.
#[inline]
pub fn normalize_or_up(v: &Vector<Real>) -> Vector<Real> {
    v.try_normalize(DEFAULT_EPSILON).unwrap_or_else(Vector::y)
}

/// In-place version of [`normalize_or_up`].
#[inline]
pub fn normalize_mut_or_up(v: &mut Vector<Real>) {
    *v = normalize_or_up(v);
}

/// Reflects `v` in-place off the line orthogonal to `normal`.
///
/// The `normal` is expected to be normalized.
#[inline]
pub fn reflect(v: &mut Vector<Real>, normal: &Vector<Real>) {
    *v -= normal * (2.0 * v.dot(normal));
}

/// Rotates `pt` in-place by `angle` radians (counter-clockwise) around `center`.
#[inline]
pub fn rotate_around(pt: &mut Point<Real>, center: &Point<Real>, angle: Real) {
    *pt = center + Rotation::new(angle) * (*pt - center);
}
