//! Non-persistent geometric queries.
//!
//! The main entry point is [`query::overlap()`](overlap()) which computes the minimum
//! translation vector ([`Mtv`]) between any two [`ColliderShape`](crate::shape::ColliderShape)s.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are versions of `overlap` for
//! shapes known at compile-time. They have the form `overlap_[shape1]_[shape2]()` and
//! skip the AABB rejection performed by `overlap`.

pub use self::mtv::Mtv;
pub use self::overlap::overlap;

mod mtv;
mod overlap;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::overlap::{
        overlap_ball_ball, overlap_ball_polygon, overlap_polygon_ball, overlap_polygon_polygon,
    };
}
