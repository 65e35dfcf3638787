use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{AxisProjection, Ball, ConvexPolygon, Cuboid, Segment};

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// An arbitrary convex polygon.
    ConvexPolygon,
    /// A box that can be rotated.
    Cuboid,
    /// A circle.
    Ball,
    /// A segment.
    Segment,
}

/// The geometry of a collider.
///
/// This is a closed set of shapes: overlap queries between any two variants are
/// dispatched with a `match` by [`crate::query::overlap`]. Every variant except
/// [`ColliderShape::Ball`] is backed by a [`ConvexPolygon`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ColliderShape {
    /// An arbitrary convex polygon.
    ConvexPolygon(ConvexPolygon),
    /// A box that can be rotated.
    Cuboid(Cuboid),
    /// A circle.
    Ball(Ball),
    /// A segment.
    Segment(Segment),
}

impl ColliderShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::ConvexPolygon(_) => ShapeType::ConvexPolygon,
            Self::Cuboid(_) => ShapeType::Cuboid,
            Self::Ball(_) => ShapeType::Ball,
            Self::Segment(_) => ShapeType::Segment,
        }
    }

    /// The polygon backing this shape, if it isn't a ball.
    pub fn as_polygon(&self) -> Option<&ConvexPolygon> {
        match self {
            Self::ConvexPolygon(p) => Some(p),
            Self::Cuboid(c) => Some(c.as_polygon()),
            Self::Segment(s) => Some(s.as_polygon()),
            Self::Ball(_) => None,
        }
    }

    fn as_polygon_mut(&mut self) -> Option<&mut ConvexPolygon> {
        match self {
            Self::ConvexPolygon(p) => Some(p),
            Self::Cuboid(c) => Some(c.as_polygon_mut()),
            Self::Segment(s) => Some(s.as_polygon_mut()),
            Self::Ball(_) => None,
        }
    }

    /// Converts this shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            Self::Ball(b) => Some(b),
            _ => None,
        }
    }

    /// Converts this shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match self {
            Self::Cuboid(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this shape to a mutable cuboid, if it is one.
    pub fn as_cuboid_mut(&mut self) -> Option<&mut Cuboid> {
        match self {
            Self::Cuboid(c) => Some(c),
            _ => None,
        }
    }

    /// Converts this shape to a segment, if it is one.
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Self::Segment(s) => Some(s),
            _ => None,
        }
    }

    /// The AABB of this shape.
    pub fn aabb(&self) -> Aabb {
        match self {
            Self::Ball(b) => b.aabb(),
            _ => self.polygon_aabb(),
        }
    }

    fn polygon_aabb(&self) -> Aabb {
        self.as_polygon()
            .map(ConvexPolygon::aabb)
            .unwrap_or_else(Aabb::new_invalid)
    }

    /// The center of this shape's AABB.
    pub fn center(&self) -> Point<Real> {
        self.aabb().center()
    }

    /// Moves this shape so the center of its AABB lies at `center`.
    pub fn set_center(&mut self, center: Point<Real>) {
        match self {
            Self::Ball(b) => b.center = center,
            _ => {
                if let Some(p) = self.as_polygon_mut() {
                    p.set_center(center)
                }
            }
        }
    }

    /// The vertices of this shape. Balls have none.
    pub fn vertices(&self) -> &[Point<Real>] {
        self.as_polygon().map(ConvexPolygon::points).unwrap_or(&[])
    }

    /// The edge normals of this shape. Balls have none.
    pub fn normals(&self) -> &[Vector<Real>] {
        self.as_polygon().map(ConvexPolygon::normals).unwrap_or(&[])
    }

    /// The vertex of this shape closest to `pt`, if this shape has vertices.
    pub fn closest_vertex(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        self.as_polygon().map(|p| p.closest_vertex(pt))
    }

    /// Tests if `pt` lies inside of this shape.
    ///
    /// - Polygons test the point against each edge (outward normals are required).
    /// - Cuboids test the point against their AABB.
    /// - Segments accept points closer than [`Segment::CONTAINS_TOLERANCE`].
    /// - Balls test the distance to their center.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        match self {
            Self::ConvexPolygon(p) => p.contains_point(pt),
            Self::Cuboid(c) => c.contains_point(pt),
            Self::Ball(b) => b.contains_point(pt),
            Self::Segment(s) => s.contains_point(pt),
        }
    }
}

impl AxisProjection for ColliderShape {
    fn project_on_axis(&self, axis: &Vector<Real>) -> (Real, Real) {
        match self {
            Self::ConvexPolygon(p) => p.project_on_axis(axis),
            Self::Cuboid(c) => c.project_on_axis(axis),
            Self::Ball(b) => b.project_on_axis(axis),
            Self::Segment(s) => s.project_on_axis(axis),
        }
    }
}

impl From<ConvexPolygon> for ColliderShape {
    fn from(shape: ConvexPolygon) -> Self {
        Self::ConvexPolygon(shape)
    }
}

impl From<Cuboid> for ColliderShape {
    fn from(shape: Cuboid) -> Self {
        Self::Cuboid(shape)
    }
}

impl From<Ball> for ColliderShape {
    fn from(shape: Ball) -> Self {
        Self::Ball(shape)
    }
}

impl From<Segment> for ColliderShape {
    fn from(shape: Segment) -> Self {
        Self::Segment(shape)
    }
}
