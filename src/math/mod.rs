//! Math utilities module
//!
//! Provides the `Vector3` value type (a re-export of glam's `DVec3`) along with
//! checked normalization, decimal rounding and the string formats used by the
//! demo consoles.

pub mod rounding;
mod vector;

pub use rounding::{round_decimal, vector_to_string};
pub use vector::{parse_vector, VectorExt};

// Re-export the glam types the intersection code is written against
pub use glam::{DVec2, DVec3};

pub type Vector3 = DVec3;
