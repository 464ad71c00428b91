use clap::{Parser, Subcommand};
use coord_geometry::intersect::{Circle, CircleConfig, Segment};
use coord_geometry::math::{parse_vector, DVec3, VectorExt};
use coord_geometry::GeometryResult;

#[derive(Parser)]
#[command(name = "intersect-demo")]
#[command(about = "Run the tutorial intersection queries from the command line")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Intersect two circles
    #[command(allow_negative_numbers = true)]
    Circles {
        /// First center as "x,y"
        #[arg(long, allow_hyphen_values = true)]
        c1: String,
        #[arg(long)]
        r1: f64,
        /// Second center as "x,y"
        #[arg(long, allow_hyphen_values = true)]
        c2: String,
        #[arg(long)]
        r2: f64,
        /// Inflation applied to the first radius
        #[arg(long, default_value_t = 0.0)]
        tolerance: f64,
        #[arg(long, default_value_t = 5)]
        precision: u32,
        /// Push the points apart the way the circle tutorial draws them
        #[arg(long)]
        legacy: bool,
    },
    /// Intersect the lines through two segments
    Lines {
        #[arg(long, allow_hyphen_values = true)]
        p1: String,
        #[arg(long, allow_hyphen_values = true)]
        p2: String,
        #[arg(long, allow_hyphen_values = true)]
        q1: String,
        #[arg(long, allow_hyphen_values = true)]
        q2: String,
    },
}

fn run(command: Command) -> GeometryResult<()> {
    match command {
        Command::Circles {
            c1,
            r1,
            c2,
            r2,
            tolerance,
            precision,
            legacy,
        } => {
            let first = Circle::new(parse_vector(&c1)?, r1)?;
            let second = Circle::new(parse_vector(&c2)?, r2)?;
            let config = CircleConfig::new(tolerance)
                .with_precision(precision)
                .with_outward_extrapolation(legacy);

            log::info!(
                "circles: ({}) r={} / ({}) r={} tolerance={}",
                first.center.component_string(),
                first.radius,
                second.center.component_string(),
                second.radius,
                tolerance
            );

            match first.intersect(&second, &config) {
                Some(points) => {
                    for (i, p) in points.iter().enumerate() {
                        log::info!("intersection {}: {}", i + 1, p.component_string());
                        println!("{}", p.rounded_string());
                    }
                }
                None => println!("no intersection"),
            }
        }
        Command::Lines { p1, p2, q1, q2 } => {
            let first = Segment::new(parse_vector(&p1)?, parse_vector(&p2)?);
            let second = Segment::new(parse_vector(&q1)?, parse_vector(&q2)?);

            match first.intersect(&second) {
                Some(hit) => {
                    let on_both = first.contains_projection(hit, 0.0)
                        && second.contains_projection(hit, 0.0);
                    log::info!("intersection: ({}, {}) within segments: {}", hit.x, hit.y, on_both);
                    println!("{}", DVec3::new(hit.x, hit.y, 0.0).rounded_string());
                }
                None => println!("no intersection"),
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args.command) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
