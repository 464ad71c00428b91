use glam::{DVec2, DVec3};

use super::rounding::vector_to_string;
use crate::error::{GeometryError, GeometryResult};

/// Extra operations the demos need on top of glam's `DVec3`.
///
/// Addition, subtraction and length come straight from glam; this trait adds
/// the fallible normalization and the console formats.
pub trait VectorExt: Sized {
    /// Unit vector in the same direction, or `DegenerateVector` when the
    /// length is zero or not finite.
    fn checked_normalize(self) -> GeometryResult<Self>;

    /// Planar 90° counter-clockwise rotation, z is kept.
    fn perp(self) -> Self;

    /// `"x: {x}, y: {y}, z: {z}"` with shortest round-trip floats.
    fn component_string(&self) -> String;

    /// Six-place fixed-point form, see [`vector_to_string`].
    fn rounded_string(&self) -> String;

    /// Drops z, keeping the xy components.
    fn planar(self) -> DVec2;
}

impl VectorExt for DVec3 {
    fn checked_normalize(self) -> GeometryResult<Self> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return Err(GeometryError::DegenerateVector);
        }
        Ok(self / length)
    }

    fn perp(self) -> Self {
        DVec3::new(-self.y, self.x, self.z)
    }

    fn component_string(&self) -> String {
        format!("x: {}, y: {}, z: {}", self.x, self.y, self.z)
    }

    fn rounded_string(&self) -> String {
        vector_to_string(*self)
    }

    fn planar(self) -> DVec2 {
        self.truncate()
    }
}

/// Parses `"x,y"` or `"x,y,z"` into a vector; a missing z is 0.
pub fn parse_vector(input: &str) -> GeometryResult<DVec3> {
    let parts = input
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| GeometryError::ParseVector(format!("{input:?}: {e}")))?;

    match parts.as_slice() {
        [x, y] => Ok(DVec3::new(*x, *y, 0.0)),
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => Err(GeometryError::ParseVector(format!(
            "{input:?}: expected 2 or 3 comma-separated numbers"
        ))),
    }
}
