use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::AxisProjection;
use crate::utils;

/// Error raised when building a polygon from an invalid set of vertices.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// The polygon does not have enough vertices.
    #[error("a polygon needs at least {required} vertices, got {found}.")]
    NotEnoughVertices {
        /// The minimum number of vertices.
        required: usize,
        /// The number of vertices actually provided.
        found: usize,
    },
}

/// A 2D convex polygon expressed in world-space.
///
/// The polygon caches its edge normals and its [`Aabb`]. Both are recomputed every time
/// its vertices move.
///
/// # Winding
///
/// The normal of the edge starting at vertex `i` is the clockwise perpendicular of
/// `points[i] - points[i + 1]`, see [`utils::cw_edge_normal`]. These normals point outward
/// only if the polygon is wound clockwise (in a y-up frame). The winding is neither
/// validated nor canonicalized: the overlap queries don't depend on it, but
/// [`ConvexPolygon::contains_point`] does. Use [`ConvexPolygon::is_clockwise`] to check it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    aabb: Aabb,
}

impl ConvexPolygon {
    /// The minimum number of vertices of a polygon.
    pub const MIN_VERTICES: usize = 2;

    /// Creates a new polygon from its vertices.
    ///
    /// Convexity is not checked. Fails if fewer than [`Self::MIN_VERTICES`] points are given.
    pub fn new(points: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        if points.len() < Self::MIN_VERTICES {
            return Err(PolygonError::NotEnoughVertices {
                required: Self::MIN_VERTICES,
                found: points.len(),
            });
        }

        Ok(Self::new_unchecked(points))
    }

    // The caller guarantees `points.len() >= MIN_VERTICES`.
    pub(crate) fn new_unchecked(points: Vec<Point<Real>>) -> Self {
        let mut result = ConvexPolygon {
            normals: vec![Vector::zeros(); points.len()],
            points,
            aabb: Aabb::new_invalid(),
        };
        result.recompute_bounding_box();
        result
    }

    /// Creates the rectangle covering `aabb`.
    ///
    /// The four vertices are wound clockwise, starting with the bottom-right corner
    /// (in a y-up frame).
    pub fn from_aabb(aabb: &Aabb) -> Self {
        let center = aabb.center();
        let he = aabb.half_extents();
        let local = [
            Vector::new(-he.x, he.y),
            Vector::new(he.x, he.y),
            Vector::new(he.x, -he.y),
            Vector::new(-he.x, -he.y),
        ];

        Self::new_unchecked(local.iter().map(|v| center - v).collect())
    }

    /// Creates the rectangle with the given corners. See [`ConvexPolygon::from_aabb`].
    pub fn from_corners(mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self::from_aabb(&Aabb::new(mins, maxs))
    }

    /// The vertices of this convex polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The normals of the edges of this convex polygon.
    ///
    /// `normals()[i]` is the normal of the edge going from `points()[i]` to the next vertex.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The cached AABB of this polygon.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// The center of this polygon's AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.aabb.center()
    }

    /// Moves this polygon so the center of its AABB lies at `center`.
    pub fn set_center(&mut self, center: Point<Real>) {
        let offset = center - self.aabb.center();
        self.translate(&offset);
    }

    /// Translates every vertex of this polygon by `offset`.
    pub fn translate(&mut self, offset: &Vector<Real>) {
        for pt in &mut self.points {
            *pt += offset;
        }

        self.recompute_bounding_box();
    }

    /// Rotates every vertex of this polygon by `angle` radians (counter-clockwise) around `center`.
    pub fn rotate_around(&mut self, center: &Point<Real>, angle: Real) {
        for pt in &mut self.points {
            utils::rotate_around(pt, center, angle);
        }

        self.recompute_bounding_box();
    }

    /// Is this polygon wound clockwise (in a y-up frame)?
    ///
    /// Only clockwise polygons have outward normals.
    pub fn is_clockwise(&self) -> bool {
        utils::signed_area2d(&self.points) < 0.0
    }

    /// The vertex of this polygon closest to `pt`.
    ///
    /// Ties are resolved in favor of the vertex with the lowest index.
    pub fn closest_vertex(&self, pt: &Point<Real>) -> Point<Real> {
        self.points[utils::point_cloud_closest_point_id(pt, &self.points)]
    }

    /// Tests if `pt` is inside this polygon.
    ///
    /// Points outside of the AABB are rejected right away. Otherwise the point must lie
    /// behind every edge, which requires outward normals (see the type-level docs).
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.aabb.contains_local_point(pt)
            && utils::point_in_convex_poly2d(pt, &self.points, &self.normals)
    }

    // Recomputes the AABB and the normals after the vertices moved.
    pub(crate) fn recompute_bounding_box(&mut self) {
        self.aabb = Aabb::from_points(&self.points);

        let n = self.points.len();
        for i in 0..n {
            let next = if i < n - 1 { i + 1 } else { 0 };
            self.normals[i] = utils::cw_edge_normal([&self.points[i], &self.points[next]]);
        }
    }
}

impl AxisProjection for ConvexPolygon {
    #[inline]
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        utils::point_cloud_projection(axis, &self.points)
    }
}
