use glam::{DVec2, DVec3};

use crate::math::{round_decimal, VectorExt};

/// Decimal places of the reported intersection point.
pub const LINE_PRECISION: u32 = 2;

/// Below this, line 2's direction has no component across line 1.
pub const PARALLEL_EPSILON: f64 = 1e-12;

/// A line segment in the xy-plane; z is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec3,
    pub end: DVec3,
}

impl Segment {
    pub fn new(start: DVec3, end: DVec3) -> Self {
        Self { start, end }
    }

    pub fn from_xy(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(DVec3::new(x1, y1, 0.0), DVec3::new(x2, y2, 0.0))
    }

    pub fn direction(&self) -> DVec2 {
        (self.end - self.start).planar()
    }

    /// Intersection of the infinite lines through both segments, rounded to
    /// [`LINE_PRECISION`] places.
    ///
    /// Parallel and collinear lines both give `None`, as does a segment whose
    /// endpoints coincide.
    pub fn intersect(&self, other: &Segment) -> Option<DVec2> {
        let hit = self.intersect_exact(other)?;
        Some(DVec2::new(
            round_decimal(hit.x, LINE_PRECISION),
            round_decimal(hit.y, LINE_PRECISION),
        ))
    }

    /// Unrounded intersection of the two lines.
    ///
    /// Works in line 1's frame: `r` is its unit direction and `r_perp` its
    /// left normal. Line 2 is expressed in that frame and followed until it
    /// crosses the `r` axis.
    pub fn intersect_exact(&self, other: &Segment) -> Option<DVec2> {
        let flat = |v: DVec3| v.planar().extend(0.0);
        let p1 = flat(self.start);
        let q1 = flat(other.start);
        let pq = q1 - p1;

        let (r, s) = match (
            (flat(self.end) - p1).checked_normalize(),
            (flat(other.end) - q1).checked_normalize(),
        ) {
            (Ok(r), Ok(s)) => (r, s),
            _ => {
                log::debug!("line intersection skipped: zero-length segment");
                return None;
            }
        };

        let r_perp = r.perp();

        let qx = pq.dot(r);
        let qy = pq.dot(r_perp);
        let sx = s.dot(r);
        let sy = s.dot(r_perp);

        if sy.abs() <= PARALLEL_EPSILON {
            log::debug!("line intersection empty: lines are parallel");
            return None;
        }

        let a = qx - qy * sx / sy;
        let hit = p1 + r * a;

        log::trace!("line intersection: ({}, {})", hit.x, hit.y);
        Some(hit.planar())
    }

    /// Whether `point` (assumed on this segment's line) falls between the
    /// endpoints, with `margin` of slack on both ends.
    pub fn contains_projection(&self, point: DVec2, margin: f64) -> bool {
        let dir = self.direction();
        let len_sq = dir.length_squared();
        if len_sq == 0.0 {
            return (point - self.start.planar()).length() <= margin;
        }
        let t = (point - self.start.planar()).dot(dir) / len_sq;
        let slack = margin / len_sq.sqrt();
        t >= -slack && t <= 1.0 + slack
    }
}

/// Flat-argument form used by the demo front ends.
pub fn line_line_intersection(p1: DVec3, p2: DVec3, q1: DVec3, q2: DVec3) -> Option<DVec2> {
    Segment::new(p1, p2).intersect(&Segment::new(q1, q2))
}
