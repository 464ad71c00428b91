//! Planar intersection queries
//!
//! Circle-circle and line-line intersection, both pure functions of their
//! inputs. An empty answer (`None`) means the configuration has no well
//! defined intersection.

mod circle;
mod line;

pub use circle::{circle_circle_intersection, Circle, CircleConfig};
pub use line::{line_line_intersection, Segment, LINE_PRECISION, PARALLEL_EPSILON};
