//! Various unsorted geometrical operators.

pub use self::cw_edge_normal::cw_edge_normal;
pub use self::point_cloud_support_point::{point_cloud_closest_point_id, point_cloud_projection};
pub use self::point_in_poly2d::{point_in_convex_poly2d, signed_area2d};
pub use self::vector_ops::{normalize_mut_or_up, normalize_or_up, perp, reflect, rotate_around};

mod cw_edge_normal;
mod point_cloud_support_point;
mod point_in_poly2d;
mod vector_ops;
