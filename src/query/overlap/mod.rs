//! Implementation details of the `overlap` function.

pub use self::overlap::overlap;
pub use self::overlap_ball_ball::overlap_ball_ball;
pub use self::overlap_ball_polygon::{overlap_ball_polygon, overlap_polygon_ball};
pub use self::overlap_polygon_polygon::overlap_polygon_polygon;

mod overlap;
mod overlap_ball_ball;
mod overlap_ball_polygon;
mod overlap_polygon_polygon;
