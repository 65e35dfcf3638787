use crate::bounding_volume::Aabb;
use crate::dynamics::RigidBodyHandle;
use crate::math::{Point, Real, Vector};
use crate::query::{self, Mtv};
use crate::shape::{Ball, ColliderShape, ConvexPolygon, Cuboid, PolygonError, Segment};

/// A shape attached to a rigid body, with the flags the physics world needs.
///
/// A collider is owned by at most one [`RigidBody`](crate::dynamics::RigidBody). It
/// keeps a non-owning handle to that body, set when it is attached and cleared when it
/// is detached.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Collider {
    shape: ColliderShape,
    is_trigger: bool,
    parent: Option<RigidBodyHandle>,
}

impl Collider {
    /// Creates a new solid collider with the given shape.
    pub fn new(shape: impl Into<ColliderShape>) -> Self {
        Self {
            shape: shape.into(),
            is_trigger: false,
            parent: None,
        }
    }

    /// A collider shaped as the convex polygon with the given vertices.
    ///
    /// The vertices must be wound clockwise for [`Collider::contains_point`] to work.
    pub fn polygon(points: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        ConvexPolygon::new(points).map(Self::new)
    }

    /// A box collider covering `aabb`, not rotated.
    pub fn cuboid(aabb: &Aabb) -> Self {
        Self::new(Cuboid::new(aabb, 0.0))
    }

    /// A box collider of the given size, centered on `center`.
    pub fn cuboid_from_center(center: Point<Real>, size: Vector<Real>) -> Self {
        Self::new(Cuboid::from_center(center, size))
    }

    /// A circle collider.
    pub fn ball(center: Point<Real>, radius: Real) -> Self {
        Self::new(Ball::new(center, radius))
    }

    /// A line collider between `a` and `b`.
    pub fn segment(a: Point<Real>, b: Point<Real>) -> Self {
        Self::new(Segment::new(a, b))
    }

    /// Sets whether this collider is a trigger.
    #[must_use]
    pub fn with_trigger(mut self, is_trigger: bool) -> Self {
        self.is_trigger = is_trigger;
        self
    }

    /// The shape of this collider.
    #[inline]
    pub fn shape(&self) -> &ColliderShape {
        &self.shape
    }

    /// A mutable reference to the shape of this collider.
    #[inline]
    pub fn shape_mut(&mut self) -> &mut ColliderShape {
        &mut self.shape
    }

    /// Is this collider a trigger?
    ///
    /// Triggers report overlaps without being pushed out of other colliders.
    #[inline]
    pub fn is_trigger(&self) -> bool {
        self.is_trigger
    }

    /// Sets whether this collider is a trigger.
    #[inline]
    pub fn set_trigger(&mut self, is_trigger: bool) {
        self.is_trigger = is_trigger;
    }

    /// The handle of the rigid body this collider is attached to.
    #[inline]
    pub fn parent(&self) -> Option<RigidBodyHandle> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<RigidBodyHandle>) {
        self.parent = parent;
    }

    /// The AABB of this collider.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.shape.aabb()
    }

    /// The center of this collider's AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.shape.center()
    }

    /// Moves this collider so the center of its AABB lies at `center`.
    #[inline]
    pub fn set_center(&mut self, center: Point<Real>) {
        self.shape.set_center(center)
    }

    /// Tests if `pt` lies inside this collider. See [`ColliderShape::contains_point`].
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.shape.contains_point(pt)
    }

    /// The vertex of this collider closest to `pt`, if its shape has vertices.
    #[inline]
    pub fn closest_vertex(&self, pt: &Point<Real>) -> Option<Point<Real>> {
        self.shape.closest_vertex(pt)
    }

    /// The minimum translation vector between this collider and `other`.
    ///
    /// See [`query::overlap`] for the orientation of the result.
    #[inline]
    pub fn overlap(&self, other: &Collider) -> Mtv {
        query::overlap(&self.shape, &other.shape)
    }

    /// Moves this collider to the pose of its parent body.
    ///
    /// Does nothing if this collider isn't attached to a body. Otherwise its center is
    /// moved to `position`, and boxes are rotated to `rotation` degrees.
    pub fn update(&mut self, position: &Point<Real>, rotation: Real) {
        if self.parent.is_none() {
            return;
        }

        self.shape.set_center(*position);

        if let Some(cuboid) = self.shape.as_cuboid_mut() {
            cuboid.set_rotation(rotation);
        }
    }
}

impl From<ColliderShape> for Collider {
    fn from(shape: ColliderShape) -> Self {
        Self::new(shape)
    }
}
