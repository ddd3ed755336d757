use std::fmt::Write;

use crate::math::Coordinate;
use crate::survey::Survey;

/// Width of the `=` rules around the report title.
const HEAVY_RULE: usize = 50;

/// Width of the `-` rules around section headers.
const LIGHT_RULE: usize = 20;

/// Renders the human-readable text report for a survey.
///
/// Purely presentational: every figure is recomputed from the survey's
/// current rings and formatting never feeds back into the metrics. The
/// output is deterministic for a given survey.
#[must_use]
pub fn render_text_report(survey: &Survey) -> String {
    let heavy = "=".repeat(HEAVY_RULE);
    let light = "-".repeat(LIGHT_RULE);
    let mut out = String::new();

    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "SURVEY AREA REPORT");
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out);

    let boundary = survey.boundary();
    let _ = writeln!(out, "Boundary: {} vertices", boundary.vertex_count());
    let _ = writeln!(out, "Gross area: {:.2} m2", survey.area());
    let _ = writeln!(out, "Net area: {:.2} m2", survey.net_area());
    let _ = writeln!(out, "Perimeter: {:.2} m", survey.perimeter());

    if let Some(ex) = boundary.extremes() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Extreme vertices:");
        let _ = writeln!(out, "  North: {}", fmt_coord(ex.north));
        let _ = writeln!(out, "  South: {}", fmt_coord(ex.south));
        let _ = writeln!(out, "  East:  {}", fmt_coord(ex.east));
        let _ = writeln!(out, "  West:  {}", fmt_coord(ex.west));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{light}");
    if survey.restriction_count() == 0 {
        let _ = writeln!(out, "No restrictions defined.");
    } else {
        let _ = writeln!(out, "Restrictions: {}", survey.restriction_count());
        let _ = writeln!(out, "{light}");
        for (index, (_, ring)) in survey.restrictions().enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Restriction {} ({} points):",
                index + 1,
                ring.vertex_count()
            );
            for (n, vertex) in ring.vertices.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", n + 1, fmt_coord(*vertex));
            }
        }
    }

    out
}

fn fmt_coord(c: Coordinate) -> String {
    format!("{:.6}, {:.6}", c.lat, c.lng)
}
