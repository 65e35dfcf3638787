//! Shapes supported by satphys2d.

pub use self::axis_projection::AxisProjection;
pub use self::ball::Ball;
pub use self::convex_polygon::{ConvexPolygon, PolygonError};
pub use self::cuboid::Cuboid;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::shape::{ColliderShape, ShapeType};

mod axis_projection;
mod ball;
mod convex_polygon;
mod cuboid;
mod segment;
mod shape;
