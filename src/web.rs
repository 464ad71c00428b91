//! WASM entry point - intersection functions callable from the tutorial pages
//!
//! Results come back as `Float64Array`s: empty when there is no intersection,
//! otherwise the flattened x/y pairs.

use crate::intersect::{Circle, CircleConfig, Segment};
use crate::math::{vector_to_string, DVec2, DVec3};
use wasm_bindgen::prelude::*;

fn flatten_circle_points(points: Option<[DVec3; 2]>) -> Vec<f64> {
    match points {
        Some([s1, s2]) => vec![s1.x, s1.y, s2.x, s2.y],
        None => Vec::new(),
    }
}

fn flatten_line_point(point: Option<DVec2>) -> Vec<f64> {
    point.map(|p| vec![p.x, p.y]).unwrap_or_default()
}

fn circle_pair(
    c1x: f64,
    c1y: f64,
    r1: f64,
    c2x: f64,
    c2y: f64,
    r2: f64,
) -> Result<(Circle, Circle), JsValue> {
    let first = Circle::from_xy(c1x, c1y, r1).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let second = Circle::from_xy(c2x, c2y, r2).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok((first, second))
}

#[wasm_bindgen(js_name = circleCircleIntersection)]
#[allow(clippy::too_many_arguments)]
pub fn circle_circle_intersection(
    c1x: f64,
    c1y: f64,
    r1: f64,
    c2x: f64,
    c2y: f64,
    r2: f64,
    tolerance: f64,
) -> Result<Vec<f64>, JsValue> {
    let (first, second) = circle_pair(c1x, c1y, r1, c2x, c2y, r2)?;
    let points = first.intersect(&second, &CircleConfig::new(tolerance));
    Ok(flatten_circle_points(points))
}

/// Same as `circleCircleIntersection` but with the outward extrapolation the
/// circle tutorial draws.
#[wasm_bindgen(js_name = circleCircleIntersectionLegacy)]
#[allow(clippy::too_many_arguments)]
pub fn circle_circle_intersection_legacy(
    c1x: f64,
    c1y: f64,
    r1: f64,
    c2x: f64,
    c2y: f64,
    r2: f64,
    tolerance: f64,
) -> Result<Vec<f64>, JsValue> {
    let (first, second) = circle_pair(c1x, c1y, r1, c2x, c2y, r2)?;
    let config = CircleConfig::new(tolerance).with_outward_extrapolation(true);
    Ok(flatten_circle_points(first.intersect(&second, &config)))
}

#[wasm_bindgen(js_name = lineLineIntersection)]
#[allow(clippy::too_many_arguments)]
pub fn line_line_intersection(
    p1x: f64,
    p1y: f64,
    p2x: f64,
    p2y: f64,
    q1x: f64,
    q1y: f64,
    q2x: f64,
    q2y: f64,
) -> Vec<f64> {
    let first = Segment::from_xy(p1x, p1y, p2x, p2y);
    let second = Segment::from_xy(q1x, q1y, q2x, q2y);
    flatten_line_point(first.intersect(&second))
}

#[wasm_bindgen(js_name = formatVector)]
pub fn format_vector(x: f64, y: f64, z: f64) -> String {
    vector_to_string(DVec3::new(x, y, z))
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).expect("Failed to init logger");
}
