use coord_geometry::intersect::{Circle, CircleConfig, Segment};
use coord_geometry::math::{DVec3, VectorExt};
use coord_geometry::GeometryResult;

struct SliderSweep {
    start: f64,
    end: f64,
    steps: u32,
}

impl SliderSweep {
    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let step = (self.end - self.start) / self.steps.max(1) as f64;
        (0..=self.steps).map(move |i| self.start + step * i as f64)
    }
}

fn circle_scene() -> GeometryResult<()> {
    let first = Circle::from_xy(4.5, 6.0, 5.0)?;
    let second = Circle::from_xy(5.5, -1.0, 5.0)?;

    for (label, config) in [
        ("geometric", CircleConfig::default()),
        ("tutorial", CircleConfig::default().with_outward_extrapolation(true)),
    ] {
        match first.intersect(&second, &config) {
            Some([s1, s2]) => {
                log::info!("[{label}] s1 {}", s1.rounded_string());
                log::info!("[{label}] s2 {}", s2.rounded_string());
            }
            None => log::info!("[{label}] no intersection"),
        }
    }

    // drag the second center to the right like the tutorial's x slider
    let sweep = SliderSweep {
        start: 0.0,
        end: 16.0,
        steps: 8,
    };
    for x in sweep.values() {
        let moved = Circle::from_xy(x, -1.0, 5.0)?;
        let count = first
            .intersect(&moved, &CircleConfig::default())
            .map_or(0, |points| points.len());
        log::info!("c2.x = {x:5.2} -> {count} points");
    }

    Ok(())
}

fn line_scene() {
    let first = Segment::from_xy(0.5, 2.0, 10.0, 5.0);

    let sweep = SliderSweep {
        start: 2.0,
        end: 8.0,
        steps: 6,
    };
    for y in sweep.values() {
        let second = Segment::from_xy(3.0, 6.0, 10.0, y);
        match first.intersect(&second) {
            Some(hit) => log::info!(
                "q2.y = {y:4.1} -> {}",
                DVec3::new(hit.x, hit.y, 0.0).rounded_string()
            ),
            None => log::info!("q2.y = {y:4.1} -> parallel"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = circle_scene() {
        log::error!("circle scene failed: {e}");
    }
    line_scene();
}
