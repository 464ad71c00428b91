use thiserror::Error;

/// Contract violations raised by the geometry routines.
///
/// Degenerate configurations (coincident centers, parallel lines) are not
/// errors; the intersection functions report them as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("cannot normalize a zero-length or non-finite vector")]
    DegenerateVector,

    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("invalid vector literal: {0}")]
    ParseVector(String),
}

pub type GeometryResult<T> = Result<T, GeometryError>;
