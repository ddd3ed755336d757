//! Arealis survey report demo.
//!
//! Builds a small equatorial survey with one restricted patch, then
//! prints its metrics, the plain-text report and the JSON report.
//!
//! Usage:
//! ```text
//! cargo run --example survey_report
//! ```

use arealis::export::{render_text_report, BuildReport};
use arealis::geometry::Ring;
use arealis::sampling::{GridParams, SampleGrid};
use arealis::survey::Survey;

fn main() -> arealis::Result<()> {
    // Default: WARN for everything, DEBUG for arealis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=arealis=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("arealis=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Roughly 111 m on a side, sitting on the equator.
    let mut survey = Survey::with_boundary(Ring::from_degrees(&[
        (0.0, 0.0),
        (0.0, 0.001),
        (0.001, 0.001),
        (0.001, 0.0),
    ]));
    survey.add_restriction(Ring::from_degrees(&[
        (0.00025, 0.00025),
        (0.00025, 0.00075),
        (0.00075, 0.00075),
        (0.00075, 0.00025),
    ]));

    println!("Gross area: {:.2} m2", survey.area());
    println!("Net area:   {:.2} m2", survey.net_area());
    println!("Perimeter:  {:.2} m", survey.perimeter());

    let params = GridParams::new(25.0);
    let grid = SampleGrid::new(params).execute(&survey)?;
    println!("Grid points at {} m: {}", params.step_meters, grid.len());
    println!();

    print!("{}", render_text_report(&survey));
    println!();

    let report = BuildReport::new(params).execute(&survey)?;
    println!("{}", report.to_json()?);
    Ok(())
}
