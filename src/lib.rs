/*!
satphys2d
=========

**satphys2d** is a small 2-dimensional collision and rigid-body stepping library
written with the rust programming language.

Convex polygons, boxes, circles and segments are tested against each other with
the Separating Axis Theorem. Every overlap test returns a minimum translation
vector ([`query::Mtv`]) and never fails: non-colliding shapes yield the zero MTV.
On top of the geometric queries, [`pipeline::PhysicsWorld`] integrates gravity
and velocities, finds candidate pairs with a brute-force broad-phase, and
separates overlapping bodies with a simple elastic response.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod dynamics;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Rotation2, Vector2};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The rotation matrix type.
    pub use Rotation2 as Rotation;
}

/// Commonly used types, re-exported for glob imports.
pub mod prelude {
    pub use crate::bounding_volume::Aabb;
    pub use crate::dynamics::{Collider, RigidBody, RigidBodyHandle, RigidBodySet};
    pub use crate::math::{Point, Real, Vector};
    pub use crate::pipeline::{
        CollisionEvent, CollisionEventKind, EventCollector, EventHandler, PhysicsWorld,
    };
    pub use crate::query::Mtv;
    pub use crate::shape::{Ball, ColliderShape, ConvexPolygon, Cuboid, Segment, ShapeType};
}
