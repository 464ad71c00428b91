use glam::DVec3;

use crate::error::{GeometryError, GeometryResult};
use crate::math::round_decimal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec3,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: DVec3, radius: f64) -> GeometryResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn from_xy(x: f64, y: f64, radius: f64) -> GeometryResult<Self> {
        Self::new(DVec3::new(x, y, 0.0), radius)
    }

    /// Intersects this circle with `other` in the xy-plane.
    ///
    /// Returns `None` for concentric circles and for circles that do not reach
    /// each other once this circle's radius is inflated by the tolerance.
    /// A tangent pair yields the same point twice.
    pub fn intersect(&self, other: &Circle, config: &CircleConfig) -> Option<[DVec3; 2]> {
        let c1 = self.center;
        let c2 = other.center;
        let (r1, r2) = (self.radius, other.radius);

        let dx = c2.x - c1.x;
        let dy = c2.y - c1.y;
        let dist_sq = dx * dx + dy * dy;
        let dist = dist_sq.sqrt();

        let finite = dist.is_finite()
            && r1.is_finite()
            && r2.is_finite()
            && config.tolerance.is_finite();
        if !finite {
            log::debug!("circle intersection skipped: non-finite input");
            return None;
        }

        if dist == 0.0 {
            log::debug!("circle intersection skipped: coincident centers");
            return None;
        }

        // tolerance only enters h^2 below, which alone would let far-apart
        // circles through whenever tolerance > 0
        if dist > r1 + r2 + config.tolerance {
            log::debug!("circle intersection empty: centers {dist} apart");
            return None;
        }

        // distance from c1 to the radical line along the center axis
        let u = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
        let inflated = r1 + config.tolerance;
        let h_sq = inflated * inflated - u * u;

        if h_sq < 0.0 {
            log::debug!("circle intersection empty: h^2 = {h_sq}");
            return None;
        }

        let h = h_sq.sqrt();
        let along_x = c1.x + u * dx / dist;
        let along_y = c1.y + u * dy / dist;
        let off_x = h * dy / dist;
        let off_y = h * dx / dist;

        let places = config.precision;
        let round = |x: f64, y: f64| {
            DVec3::new(round_decimal(x, places), round_decimal(y, places), c1.z)
        };

        let mut s1 = round(along_x + off_x, along_y - off_y);
        let mut s2 = round(along_x - off_x, along_y + off_y);

        if config.outward_extrapolation {
            let span = s2 - s1;
            s1 -= span;
            s2 += span;
        }

        log::trace!("circle intersection: {s1} / {s2}");
        Some([s1, s2])
    }
}

/// Per-query settings for circle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleConfig {
    /// Inflation applied to the first circle's radius.
    pub tolerance: f64,
    /// Decimal places each output coordinate is rounded to.
    pub precision: u32,
    /// Pushes each point away from the other by their separation, as the
    /// circle tutorial's on-screen output does.
    pub outward_extrapolation: bool,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            precision: 5,
            outward_extrapolation: false,
        }
    }
}

impl CircleConfig {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_outward_extrapolation(mut self, enabled: bool) -> Self {
        self.outward_extrapolation = enabled;
        self
    }
}

/// Flat-argument form used by the demo front ends.
///
/// Radii are not checked for sign here; a non-positive radius simply feeds
/// the formula, matching the slider-driven callers. Non-finite radii give
/// `None`.
pub fn circle_circle_intersection(
    center1: DVec3,
    radius1: f64,
    center2: DVec3,
    radius2: f64,
    tolerance: f64,
) -> Option<[DVec3; 2]> {
    let first = Circle {
        center: center1,
        radius: radius1,
    };
    let second = Circle {
        center: center2,
        radius: radius2,
    };
    first.intersect(&second, &CircleConfig::new(tolerance))
}
