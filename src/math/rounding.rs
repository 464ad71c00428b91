use glam::DVec3;

/// Decimal places used by [`vector_to_string`].
pub const DISPLAY_PLACES: u32 = 6;

/// Rounds `value` to `places` decimal places.
///
/// Uses `f64::round`, so exact halves round away from zero (`0.125 -> 0.13`,
/// `-2.5 -> -3.0`). Non-finite values pass through untouched.
pub fn round_decimal(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Formats a vector for log output with exactly six fractional digits.
pub fn vector_to_string(v: DVec3) -> String {
    format!(
        "x: {:.prec$}, y: {:.prec$}, z: {:.prec$}",
        display_component(v.x),
        display_component(v.y),
        display_component(v.z),
        prec = DISPLAY_PLACES as usize,
    )
}

fn display_component(value: f64) -> f64 {
    // adding 0.0 folds -0.0 into 0.0
    round_decimal(value, DISPLAY_PLACES) + 0.0
}
