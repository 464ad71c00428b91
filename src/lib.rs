//! # coord-geometry
//!
//! The framework-independent math behind a set of browser 3D tutorials:
//! circle-circle and line-line intersection in the xy-plane, plus the vector
//! helpers and rounding used to print results to the demo consoles.
//!
//! ## Features
//! - Circle-circle intersection with radius tolerance and configurable rounding
//! - Projection-based line-line intersection
//! - Checked vector normalization (no NaN leaks)
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust
//! use coord_geometry::intersect::{Circle, CircleConfig, Segment};
//!
//! let a = Circle::from_xy(4.5, 6.0, 5.0).unwrap();
//! let b = Circle::from_xy(5.5, -1.0, 5.0).unwrap();
//! let [s1, s2] = a.intersect(&b, &CircleConfig::default()).unwrap();
//! assert_eq!((s1.x, s1.y), (1.5, 2.0));
//! assert_eq!((s2.x, s2.y), (8.5, 3.0));
//!
//! let l1 = Segment::from_xy(0.0, 0.0, 4.0, 4.0);
//! let l2 = Segment::from_xy(0.0, 4.0, 4.0, 0.0);
//! assert_eq!(l1.intersect(&l2).map(|p| (p.x, p.y)), Some((2.0, 2.0)));
//! ```

pub mod error;
pub mod intersect;
pub mod math;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{GeometryError, GeometryResult};
pub use intersect::{
    circle_circle_intersection, line_line_intersection, Circle, CircleConfig, Segment,
};
pub use math::{round_decimal, vector_to_string, Vector3, VectorExt};
